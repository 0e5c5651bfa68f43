//! Directive interpreter: the dispatcher state machine and its handlers.
//!
//! The interpreter consumes the directive token stream strictly left to
//! right. Each command token routes to one handler; a handler consumes its
//! own operands, works on the single image buffer slot, and returns a
//! [`Step`] — either keep processing or halt with an exit status. There is no
//! lookahead beyond the operands a handler takes and no backtracking.
//!
//! Exit status contract:
//! - `0` — success, explicit `/EXIT`, or empty input
//! - `1` — unrecognized directive
//! - `2` — any in-directive failure (missing operand, malformed dimensions,
//!   empty buffer, unknown filter, encode failure)
//!
//! Fatal I/O from the image service (a failing load or save) is not caught
//! here: it propagates out of [`Interpreter::run`] as a [`ServiceError`] and
//! aborts the run. `main` maps it to exit code 2 at the process boundary.

use crate::filters::FilterRegistry;
use crate::imaging::{EdgeMode, ImageService, ServiceError};
use crate::output;
use crate::parse::{DimensionSpec, FilterSpec};
use std::path::Path;

pub const EXIT_OK: i32 = 0;
pub const EXIT_UNKNOWN_DIRECTIVE: i32 = 1;
pub const EXIT_DIRECTIVE_FAILED: i32 = 2;

/// Quality for lossy JPEG output. Fixed, not user-configurable.
const JPEG_QUALITY: u8 = 100;

/// Out-of-bounds sampling for every RESIZE, on both axes. Fixed policy.
const RESIZE_EDGE_MODE: EdgeMode = EdgeMode::Constant;

/// Outcome of one directive: keep consuming tokens or halt the run.
enum Step {
    Continue,
    Halt(i32),
}

/// The dispatcher. Owns the single image buffer slot and borrows its two
/// collaborators: the filter registry and the image service.
pub struct Interpreter<'a, S: ImageService> {
    registry: &'a FilterRegistry,
    service: &'a S,
    buffer: Option<S::Image>,
}

impl<'a, S: ImageService> Interpreter<'a, S> {
    pub fn new(registry: &'a FilterRegistry, service: &'a S) -> Self {
        Self {
            registry,
            service,
            buffer: None,
        }
    }

    /// Process the whole token stream and return the exit status.
    ///
    /// Command words match case-insensitively. An empty stream and an
    /// exhausted stream both finish with status 0.
    pub fn run<T: AsRef<str>>(&mut self, tokens: &[T]) -> Result<i32, ServiceError> {
        let mut tokens = tokens.iter().map(AsRef::as_ref);
        while let Some(command) = tokens.next() {
            let step = match command.to_uppercase().as_str() {
                "/LOAD" => self.load(&mut tokens)?,
                "/RESIZE" => self.resize(&mut tokens)?,
                "/SAVE" => self.save(&mut tokens)?,
                // Remaining tokens are discarded.
                "/EXIT" => Step::Halt(EXIT_OK),
                _ => {
                    output::print_help(self.registry);
                    Step::Halt(EXIT_UNKNOWN_DIRECTIVE)
                }
            };
            if let Step::Halt(code) = step {
                return Ok(code);
            }
        }
        Ok(EXIT_OK)
    }

    /// `/LOAD <path>` — decode an image into the buffer, replacing (and
    /// releasing) whatever was there.
    fn load<'t>(
        &mut self,
        tokens: &mut impl Iterator<Item = &'t str>,
    ) -> Result<Step, ServiceError> {
        let Some(path) = tokens.next() else {
            output::print_help(self.registry);
            return Ok(Step::Halt(EXIT_DIRECTIVE_FAILED));
        };
        self.buffer = Some(self.service.load(Path::new(path))?);
        Ok(Step::Continue)
    }

    /// `/RESIZE <WxH> <filter>[(<repeat>)]` — apply a registry filter to the
    /// buffer image `repeat` times.
    ///
    /// Validation order: operand count, dimension spec, filter spec (which
    /// never fails — a malformed repeat degrades to 1), non-empty buffer,
    /// registry resolution. Each application consumes the previous image, so
    /// exactly one handle is alive at any point in the loop.
    fn resize<'t>(
        &mut self,
        tokens: &mut impl Iterator<Item = &'t str>,
    ) -> Result<Step, ServiceError> {
        let (Some(dims_token), Some(filter_token)) = (tokens.next(), tokens.next()) else {
            output::print_help(self.registry);
            return Ok(Step::Halt(EXIT_DIRECTIVE_FAILED));
        };
        let Some(spec) = DimensionSpec::parse(dims_token) else {
            output::print_help(self.registry);
            return Ok(Step::Halt(EXIT_DIRECTIVE_FAILED));
        };
        let filter = FilterSpec::parse(filter_token);

        let Some(mut image) = self.buffer.take() else {
            output::notify("nothing to resize: no image loaded");
            return Ok(Step::Halt(EXIT_DIRECTIVE_FAILED));
        };
        let Some(kind) = self.registry.resolve(&filter.name) else {
            output::notify(&format!("unknown filter: {}", filter.name));
            return Ok(Step::Halt(EXIT_DIRECTIVE_FAILED));
        };

        output::print_resize_line(spec.width, spec.height, filter.repeat, &filter.name);
        for _ in 0..filter.repeat {
            image = self
                .service
                .apply_filter(image, kind, spec, RESIZE_EDGE_MODE)?;
        }
        self.buffer = Some(image);
        Ok(Step::Continue)
    }

    /// `/SAVE <path>` — encode the buffer image to disk.
    ///
    /// A selector failure already notified the user, so it halts with
    /// status 2 without an extra help display.
    fn save<'t>(
        &mut self,
        tokens: &mut impl Iterator<Item = &'t str>,
    ) -> Result<Step, ServiceError> {
        let Some(path) = tokens.next() else {
            output::print_help(self.registry);
            return Ok(Step::Halt(EXIT_DIRECTIVE_FAILED));
        };
        if self.encode_to(Path::new(path))? {
            Ok(Step::Continue)
        } else {
            Ok(Step::Halt(EXIT_DIRECTIVE_FAILED))
        }
    }

    /// Output encoder selection. JPEG extensions (`.jpg`/`.jpeg`, any case)
    /// require the lossy encoder and go out at fixed quality 100; every other
    /// extension goes through the generic save, which infers the format.
    /// Never mutates the buffer.
    fn encode_to(&self, path: &Path) -> Result<bool, ServiceError> {
        let Some(image) = self.buffer.as_ref() else {
            output::notify("nothing to save: no image loaded");
            return Ok(false);
        };
        if is_jpeg_path(path) {
            if !self.service.has_jpeg_encoder() {
                output::notify("no JPEG support: encoder not available");
                return Ok(false);
            }
            self.service.save_jpeg(image, path, JPEG_QUALITY)?;
        } else {
            self.service.save(image, path)?;
        }
        Ok(true)
    }
}

fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
}
