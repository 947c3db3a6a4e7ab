//! Build the whole site
//!
//! A build walks a fixed sequence of stages. The first failing step stops the
//! build and is reported with the stage it was trying to reach. Nothing
//! already written is rolled back.

use chrono::{NaiveDate, Utc};
use std::fmt;
use std::time::Instant;

use crate::content::loader::ContentLoader;
use crate::error::{Error, Result};
use crate::generator::{copy_static_assets, Generator};
use crate::site::SiteModel;
use crate::Folio;

/// Progress of a build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    Idle,
    ContentLoaded,
    ModelBuilt,
    OutputPrepared,
    AssetsCopied,
    PagesRendered,
    FeedsGenerated,
    Done,
    Failed,
}

impl BuildStage {
    /// What the build is doing on its way to this stage
    fn action(self) -> &'static str {
        match self {
            BuildStage::Idle => "starting",
            BuildStage::ContentLoaded => "loading content",
            BuildStage::ModelBuilt => "building the site model",
            BuildStage::OutputPrepared => "preparing the output directory",
            BuildStage::AssetsCopied => "copying static assets",
            BuildStage::PagesRendered => "rendering pages",
            BuildStage::FeedsGenerated => "writing feeds",
            BuildStage::Done => "finishing",
            BuildStage::Failed => "failing",
        }
    }
}

/// A failed build, tagged with the stage that was not reached
#[derive(Debug, thiserror::Error)]
#[error("build failed while {}", .stage.action())]
pub struct BuildError {
    pub stage: BuildStage,
    #[source]
    pub source: Error,
}

/// Counts reported by a successful build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub posts: usize,
    pub projects: usize,
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} posts, {} projects", self.posts, self.projects)
    }
}

/// Tracks the current stage; `Failed` is terminal
struct Pipeline {
    stage: BuildStage,
}

impl Pipeline {
    fn new() -> Self {
        Self {
            stage: BuildStage::Idle,
        }
    }

    /// Run one step and move to `next` if it succeeds
    fn advance<T>(
        &mut self,
        next: BuildStage,
        step: impl FnOnce() -> Result<T>,
    ) -> Result<T, BuildError> {
        if self.stage == BuildStage::Failed {
            return Err(BuildError {
                stage: next,
                source: Error::Aborted,
            });
        }
        match step() {
            Ok(value) => {
                tracing::debug!("Build stage: {:?} -> {:?}", self.stage, next);
                self.stage = next;
                Ok(value)
            }
            Err(source) => {
                self.stage = BuildStage::Failed;
                Err(BuildError { stage: next, source })
            }
        }
    }
}

/// Build the site, stamping the sitemap with today's date
pub fn run(folio: &Folio) -> Result<BuildSummary, BuildError> {
    run_at(folio, Utc::now().date_naive())
}

/// Build the site with an explicit build date
pub fn run_at(folio: &Folio, today: NaiveDate) -> Result<BuildSummary, BuildError> {
    let start = Instant::now();
    let mut pipeline = Pipeline::new();

    let (posts, projects) = pipeline.advance(BuildStage::ContentLoaded, || {
        let loader = ContentLoader::new(folio);
        let posts = loader.load_posts()?;
        let projects = loader.load_projects()?;
        tracing::info!("Loaded {} posts and {} projects", posts.len(), projects.len());
        Ok((posts, projects))
    })?;

    let site = pipeline.advance(BuildStage::ModelBuilt, || {
        Ok(SiteModel::build(posts, projects, &folio.config.limits))
    })?;

    let generator = pipeline.advance(BuildStage::OutputPrepared, || {
        let generator = Generator::new(&folio.config, &folio.output_dir)?;
        generator.prepare_output()?;
        Ok(generator)
    })?;

    // Site files overwrite theme files at the same path
    pipeline.advance(BuildStage::AssetsCopied, || {
        generator.write_theme_assets()?;
        copy_static_assets(&folio.static_dir, generator.output_dir())
    })?;

    pipeline.advance(BuildStage::PagesRendered, || {
        generator.render_home(&site)?;
        generator.render_blog_index(&site)?;
        generator.render_posts(&site)?;
        generator.render_works(&site)?;
        generator.render_static_pages()
    })?;

    pipeline.advance(BuildStage::FeedsGenerated, || {
        generator.write_search_index(&site)?;
        generator.write_feed(&site)?;
        generator.write_sitemap(&site, today)
    })?;

    let summary = BuildSummary {
        posts: site.posts().len(),
        projects: site.projects().len(),
    };
    pipeline.advance(BuildStage::Done, || Ok(()))?;

    tracing::info!(
        "Built {} in {:.2}s -> {:?}",
        summary,
        start.elapsed().as_secs_f64(),
        folio.output_dir
    );
    Ok(summary)
}
