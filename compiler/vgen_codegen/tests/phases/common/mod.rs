//! Shared builders for phase tests.

use vgen_codegen::{generate, GenConfig, Generated, HostDecl};
use vgen_diagnostic::Diagnostic;

/// Parse `source` as a single item and recognize it as a catalog.
pub fn decl(source: &str) -> HostDecl {
    let item: syn::Item = syn::parse_str(source).expect("test source should parse");
    HostDecl::from_item(&item).expect("test source should be a catalog")
}

/// Run the whole pass and expect it to succeed.
pub fn generated(source: &str, config: &GenConfig) -> Generated {
    match generate(&decl(source), config) {
        Ok(generated) => generated,
        Err(errors) => panic!("generation failed: {errors:#?}"),
    }
}

/// Declared names of the projected variants, in order.
pub fn variant_names(generated: &Generated) -> Vec<&str> {
    let variants = generated.projected.variants();
    variants.iter().map(|v| v.name.as_str()).collect()
}

/// Run the whole pass and expect it to fail.
pub fn generation_errors(source: &str, config: &GenConfig) -> Vec<Diagnostic> {
    match generate(&decl(source), config) {
        Ok(generated) => panic!(
            "expected generation to fail, got:\n{}",
            generated.artifact.to_source()
        ),
        Err(errors) => errors,
    }
}

pub const FEATURE_X: &str = r"
    #[derive(Debug, Clone, PartialEq)]
    pub enum FeatureXExperiment {
        variantA { headerMessage: String },
        variantB { headerMessage: String },
        on,
        off,
    }
";

pub const BAND_GREETING: &str = r"
    enum FTUXMusicBandGreeting {
        on,
        off,
        theRollingStones { preferredMember: String, song: String },
        theBeatles { preferredMember: String, song: String },
    }
";
