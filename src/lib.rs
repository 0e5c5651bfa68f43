//! # imgbatch
//!
//! A batch command interpreter for scripted image transformations. One
//! invocation drives a single in-memory image buffer through a flat directive
//! stream — load, resize/filter, save, exit — so a whole conversion pipeline
//! runs without a graphical interface:
//!
//! ```text
//! imgbatch /LOAD in.png /RESIZE 640x0 lanczos /SAVE out.jpg
//! imgbatch /LOAD sprite.png /RESIZE 0x0 "scale2x(2)" /SAVE sprite-4x.png
//! ```
//!
//! # Architecture
//!
//! The interpreter is a strictly linear state machine over the token stream.
//! Each directive consumes its operands exactly once; the single buffer slot
//! is the only state carried between directives, and it is replaced — never
//! aliased — by every load and every filter application.
//!
//! ```text
//! tokens → dispatcher → handler → filter registry / image service → buffer
//! ```
//!
//! The pixel work sits behind the [`imaging::ImageService`] trait, so the
//! interpreter and its tests never depend on a codec: unit tests drive the
//! dispatcher with a recording mock, and only the production service touches
//! the `image` crate.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`interpreter`] | Dispatcher state machine, directive handlers, encoder selection |
//! | [`parse`] | `<W>x<H>` and `name(repeat)` operand grammars |
//! | [`filters`] | Named filter registry with case-insensitive first-wins lookup |
//! | [`imaging`] | `ImageService` trait, auto-dimension math, `image`-crate implementation |
//! | [`output`] | Help transcript, RESIZE diagnostics, user-visible error reporting |
//!
//! # Exit codes
//!
//! `0` success (including empty input and explicit `/EXIT`), `1` unrecognized
//! directive, `2` any other failure: missing operand, malformed dimensions,
//! empty buffer, unknown filter, missing JPEG encoder, failed load or save.

pub mod filters;
pub mod imaging;
pub mod interpreter;
pub mod output;
pub mod parse;
