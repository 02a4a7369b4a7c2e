use anyhow::{bail, Context, Result};
use block_codec::hash::to_display_hex;
use block_codec::Block;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "block-cli")]
#[command(about = "Decode, encode and check Litecoin-family blocks")]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct Input {
    /// Block bytes as hex
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    hex: Option<String>,
    /// File holding the binary block
    #[arg(long)]
    file: Option<PathBuf>,
    /// Input starts with the 8 framing bytes of a node's raw block endpoint
    #[arg(long)]
    raw: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Hex,
    Summary,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a block and print it
    Decode {
        #[command(flatten)]
        input: Input,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the block id
    Id {
        #[command(flatten)]
        input: Input,
    },
    /// Recompute the merkle root and compare it with the header
    Verify {
        #[command(flatten)]
        input: Input,
    },
    /// Read the JSON form of a block and print its canonical hex
    Encode {
        #[arg(long)]
        json: PathBuf,
    },
}

fn load(input: &Input) -> Result<Block> {
    let bytes = match (&input.hex, &input.file) {
        (Some(h), _) => hex::decode(h.trim()).context("decoding --hex")?,
        (None, Some(path)) => {
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?
        }
        (None, None) => bail!("one of --hex or --file is required"),
    };
    debug!(len = bytes.len(), raw = input.raw, "loaded block bytes");
    let block = if input.raw {
        Block::from_raw_block(&bytes)
    } else {
        Block::from_buffer(&bytes)
    };
    block.context("parsing block")
}

fn print_summary(block: &Block) {
    let h = &block.header;
    println!("id:          {}", block.id());
    println!("version:     {}", h.version());
    println!("prev hash:   {}", to_display_hex(h.prev_hash()));
    println!("merkle root: {}", to_display_hex(h.merkle_root()));
    println!("time:        {}", h.time());
    println!("bits:        {:#010x}", h.bits());
    if let Some(target) = h.target() {
        println!("target:      {}", hex::encode(target));
    }
    println!("nonce:       {}", h.nonce());
    println!("txs:         {}", block.transactions.len());
    println!("size:        {}", block.size());
    println!("merkle ok:   {}", block.valid_merkle_root());
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid --log-level")?;
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Decode { input, format } => {
            let block = load(&input)?;
            info!(id = %block.id(), txs = block.transactions.len(), "decoded block");
            match format {
                Format::Json => println!("{}", block.to_json_string()?),
                Format::Hex => println!("{block}"),
                Format::Summary => print_summary(&block),
            }
        }
        Command::Id { input } => {
            println!("{}", load(&input)?.id());
        }
        Command::Verify { input } => {
            let block = load(&input)?;
            println!("computed:  {}", block.merkle_root_hex());
            println!("committed: {}", to_display_hex(block.header.merkle_root()));
            if !block.valid_merkle_root() {
                bail!("merkle root mismatch for block {}", block.id());
            }
            println!("valid");
        }
        Command::Encode { json } => {
            let text = std::fs::read_to_string(&json)
                .with_context(|| format!("reading {}", json.display()))?;
            let block: Block = Block::from_json(&text).context("parsing block json")?;
            println!("{block}");
        }
    }
    Ok(())
}
