//! The one-shot generation pass.

use vgen_diagnostic::Diagnostic;
use vgen_ir::ProjectedCatalog;

use crate::config::GenConfig;
use crate::dispatch::Dispatcher;
use crate::emit::{emit, EmitOptions, EmittedArtifact};
use crate::frontend::HostDecl;
use crate::project::{project, shadow_warnings};

/// Everything one pass produced for a catalog.
#[derive(Clone, Debug)]
pub struct Generated {
    pub projected: ProjectedCatalog,
    pub dispatcher: Dispatcher,
    pub artifact: EmittedArtifact,
    /// Advisory diagnostics (`W1001`); generation still succeeded.
    pub warnings: Vec<Diagnostic>,
}

/// Lex, project, synthesize and emit one catalog.
///
/// Nothing is cached: calling this twice on the same declaration repeats
/// the whole pass.
pub fn generate(decl: &HostDecl, config: &GenConfig) -> Result<Generated, Vec<Diagnostic>> {
    let span = tracing::debug_span!("generate", catalog = %decl.name, lexer = %config.lex_mode);
    let _guard = span.enter();

    let catalog = decl.catalog(config.lex_mode);
    let projected = project(&catalog, &config.exclude).map_err(|diag| vec![diag])?;
    let warnings = shadow_warnings(&projected);
    let dispatcher = Dispatcher::synthesize(&projected);

    let options = EmitOptions::new(config.consumable_name_for(&decl.name))
        .with_dispatch_fn(config.dispatch_fn.clone())
        .with_vis(decl.vis.clone())
        .with_attrs(decl.attrs.clone())
        .with_variant_attrs(decl.variant_attrs());
    let artifact = emit(&projected, &dispatcher, &options)?;

    Ok(Generated {
        projected,
        dispatcher,
        artifact,
        warnings,
    })
}
