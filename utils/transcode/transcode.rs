use charconv::{lookup, CharsetId, ConverterState, RunResult};
use clap::Parser;
use log::debug;
use snafu::{prelude::*, Whatever};
use std::io::{Read, Write};

type Result<T, E = Whatever> = std::result::Result<T, E>;

const BUF_SIZE: usize = 4096;

/// Streams stdin through a charset conversion and writes the result to stdout.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Cli {
    /// Source charset name (e.g. ISO-8859-1, Windows-1251, UTF-16LE)
    from: String,

    /// Destination charset name
    to: String,
}

#[snafu::report]
fn main() -> Result<()> {
    let cli = Cli::parse();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "transcode=info");
    }
    pretty_env_logger::try_init().with_whatever_context(|_| "could not initialize logger")?;

    let source = resolve_charset(&cli.from)?;
    let dest = resolve_charset(&cli.to)?;
    debug!("converting {} -> {}", source.name(), dest.name());

    run(source, dest)
}

fn resolve_charset(name: &str) -> Result<CharsetId> {
    lookup(name).with_whatever_context(|| format!("unknown charset {name:?}"))
}

fn run(source: CharsetId, dest: CharsetId) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdin = stdin.lock();
    let mut stdout = stdout.lock();

    let mut state = ConverterState::new(source, dest);
    let mut in_buf = [0u8; BUF_SIZE];
    let mut out_buf = [0u8; BUF_SIZE];

    loop {
        let n = stdin
            .read(&mut in_buf)
            .with_whatever_context(|e| format!("read error: {e}"))?;
        if n == 0 {
            break;
        }
        let mut src = &in_buf[..n];
        loop {
            let (result, consumed, written) = state.run(src, &mut out_buf);
            stdout
                .write_all(&out_buf[..written])
                .with_whatever_context(|e| format!("write error: {e}"))?;
            src = &src[consumed..];
            match result {
                RunResult::SourceEnd | RunResult::SourceAndDestEnd => break,
                RunResult::DestEnd => continue,
            }
        }
    }

    stdout
        .flush()
        .with_whatever_context(|e| format!("flush error: {e}"))?;
    Ok(())
}
