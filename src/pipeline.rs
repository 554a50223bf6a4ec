//! One-call orchestration of the pipeline stages: expand (or compile) →
//! assign → resolve.
//!
//! A [`Pipeline`] owns the injected collaborators; each compilation run is
//! otherwise independent, so a single pipeline may be shared across threads
//! by the caller as long as each run gets its own input.

use sitewright_core::{
    Assigned, CompileOptions, EngineError, ExpandOptions, InMemoryModuleRegistry, ModuleRegistry,
    NullRecorder, PageAst, PageDoc, Recorder, ResolveOptions, SiteInput, Skeleton, StyleMap,
    assign, compile, expand, resolve,
};
use sitewright_style::{Industry, StylePreset};

/// Per-run settings. Free-form industry and style names normalize through
/// the preset tables; unknown values fall back rather than erroring.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub industry: Industry,
    pub style: StylePreset,
    /// Pages to generate, in order.
    pub pages: Vec<String>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            industry: Industry::Generic,
            style: StylePreset::Modern,
            pages: vec!["home".to_owned()],
        }
    }
}

impl PipelineOptions {
    pub fn new(industry: &str, style: &str) -> Self {
        Self {
            industry: Industry::from_name(industry),
            style: StylePreset::from_name(style),
            ..Self::default()
        }
    }

    pub fn with_pages(mut self, pages: &[&str]) -> Self {
        self.pages = pages.iter().map(|p| (*p).to_owned()).collect();
        self
    }
}

/// Everything a compilation run produces: the addressed tree, the path map,
/// the section metadata summary and the resolved style map.
#[derive(Debug, Clone)]
pub struct CompiledSite {
    pub skeleton: Skeleton,
    pub assigned: Assigned,
    pub styles: StyleMap,
}

/// The engine facade wiring the stages together with injected
/// collaborators.
pub struct Pipeline {
    registry: Box<dyn ModuleRegistry>,
    recorder: Box<dyn Recorder>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            registry: Box::new(InMemoryModuleRegistry::new()),
            recorder: Box::new(NullRecorder),
        }
    }

    pub fn with_registry(mut self, registry: impl ModuleRegistry + 'static) -> Self {
        self.registry = Box::new(registry);
        self
    }

    pub fn with_recorder(mut self, recorder: impl Recorder + 'static) -> Self {
        self.recorder = Box::new(recorder);
        self
    }

    /// Compiles a site from a structural description (the mockup-skeleton
    /// entry point): expand → assign → resolve.
    pub fn compile_site(
        &self,
        input: &SiteInput,
        opts: &PipelineOptions,
    ) -> Result<CompiledSite, EngineError> {
        let mut skeleton = expand(
            input,
            &opts.pages,
            &ExpandOptions {
                industry: opts.industry,
                registry: self.registry.as_ref(),
                recorder: self.recorder.as_ref(),
            },
        );
        let assigned = assign(&mut skeleton);
        let styles = resolve(
            &skeleton,
            &assigned,
            &ResolveOptions {
                style: opts.style,
                industry: opts.industry,
                recorder: self.recorder.as_ref(),
            },
        )?;
        Ok(CompiledSite {
            skeleton,
            assigned,
            styles,
        })
    }

    /// Compiles a single page from a generative layout AST (the alternate
    /// entry point): compile → assign → resolve. The result contains only
    /// the given page, no header or footer.
    pub fn compile_ast(
        &self,
        ast: &PageAst,
        page: &str,
        opts: &PipelineOptions,
    ) -> Result<CompiledSite, EngineError> {
        let sections = compile(
            ast,
            &CompileOptions {
                style: opts.style,
                industry: opts.industry,
                recorder: self.recorder.as_ref(),
            },
        );

        let mut skeleton = Skeleton::default();
        skeleton.pages.insert(
            page.to_owned(),
            PageDoc {
                title: page.to_owned(),
                sections,
            },
        );

        let assigned = assign(&mut skeleton);
        let styles = resolve(
            &skeleton,
            &assigned,
            &ResolveOptions {
                style: opts.style,
                industry: opts.industry,
                recorder: self.recorder.as_ref(),
            },
        )?;
        Ok(CompiledSite {
            skeleton,
            assigned,
            styles,
        })
    }
}
