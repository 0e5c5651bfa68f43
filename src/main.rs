use clap::Parser;
use imgbatch::filters::FilterRegistry;
use imgbatch::imaging::RustService;
use imgbatch::interpreter::{EXIT_DIRECTIVE_FAILED, Interpreter};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "imgbatch")]
#[command(about = "Batch command interpreter for scripted image pipelines")]
#[command(long_about = "\
Batch command interpreter for scripted image pipelines

One in-memory image buffer is driven through a flat directive stream; the
buffer is reused across repeated load/transform/save cycles.

Directives (command words are case-insensitive):

  /LOAD <path>                          Decode an image into the buffer
  /RESIZE <WxH> <filter>[(<repeat>)]    Apply a named filter, <repeat> times
  /SAVE <path>                          Encode the buffer (format from extension;
                                        .jpg/.jpeg encodes at quality 100)
  /EXIT                                 Stop, discarding remaining directives

<WxH> are integers; 0 means auto on that axis (aspect-preserving, or the
filter's natural scale when both are 0).

Examples:

  imgbatch /LOAD in.png /RESIZE 640x0 lanczos /SAVE out.jpg
  imgbatch /LOAD a.bmp /RESIZE 0x0 scale2x /SAVE a.png \\
           /LOAD b.bmp /RESIZE 0x0 scale2x /SAVE b.png

Exit codes: 0 success, 1 unrecognized directive, 2 any other failure.")]
#[command(version)]
struct Cli {
    /// Directive stream, e.g. /LOAD in.png /RESIZE 640x480 lanczos /SAVE out.jpg
    directives: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let registry = FilterRegistry::builtin();
    let service = RustService::new();
    let mut interpreter = Interpreter::new(&registry, &service);

    match interpreter.run(&cli.directives) {
        Ok(status) => ExitCode::from(status as u8),
        // Fatal load/save I/O aborts the run; report it and use the same
        // status family as every other directive failure.
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_DIRECTIVE_FAILED as u8)
        }
    }
}
