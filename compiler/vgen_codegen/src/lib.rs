//! The generation pass for variant catalogs.
//!
//! Given an enum-like catalog declaration this crate derives:
//!
//! 1. a *projected* catalog without the control variants (`on` / `off` by
//!    default), and
//! 2. a *dispatcher* that builds a projected value from a variation name and
//!    a string-keyed map of field values.
//!
//! ```text
//! syn::Item ──frontend──▶ HostDecl ──lexer──▶ VariantCatalog
//!     ──project──▶ ProjectedCatalog ──synthesize──▶ Dispatcher
//!     ──emit──▶ EmittedArtifact (enum + impl, tokens or formatted source)
//! ```
//!
//! Each pass owns its data and keeps no state between runs; two catalogs
//! can be generated on different threads without coordination.
//!
//! The dispatcher exists twice with the same semantics: as the runtime
//! [`Dispatcher`] value and as the Rust function [`emit`] writes from it.
//! Both test names case-insensitively, in declaration order, and return the
//! first match. Missing field values bind the empty string.
//!
//! # Tracing
//!
//! - `RUST_LOG=vgen_codegen=debug`: one line per pass stage.
//! - `RUST_LOG=vgen_codegen=trace`: per-arm and per-field detail.

mod config;
pub mod coding_keys;
mod dispatch;
pub mod echo;
mod emit;
pub mod frontend;
mod pipeline;
mod project;

pub use config::{parse_args, GenConfig};
pub use dispatch::{DispatchArm, Dispatcher};
pub use emit::{emit, EmitOptions, EmittedArtifact};
pub use frontend::{catalogs_in_file, HostDecl, MarkedDecl, RawVariant};
pub use pipeline::{generate, Generated};
pub use project::{project, shadow_warnings};

/// Convert a `proc_macro2` span into a declaration span.
///
/// Spans created inside a compiler-driven macro expansion have no byte
/// offsets and map to [`vgen_ir::Span::DUMMY`].
pub(crate) fn span_of(span: proc_macro2::Span) -> vgen_ir::Span {
    vgen_ir::Span::try_from_range(span.byte_range()).unwrap_or(vgen_ir::Span::DUMMY)
}
