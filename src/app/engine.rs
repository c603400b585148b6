//! Orchestrates one end-to-end run: load the compile database, extract
//! every translation unit in parallel, merge the results deterministically,
//! and render. Grounded on the teacher's `app/engine.rs` orchestration
//! shape; the per-TU parallelism is new, grounded on `rayon`'s use in
//! `ziongh-miller` (see DESIGN.md).

use crate::domain::config::Config;
use crate::domain::corpus::Corpus;
use crate::domain::error::CoreError;
use crate::domain::extractor::{CorpusFragment, Extractor};
use crate::domain::filters::FilterPipeline;
use crate::domain::ports::{CompileDatabase, Frontend, Renderer};
use rayon::prelude::*;
use std::io::Write;

/// The outcome of a full extraction run: the finished Corpus plus every
/// non-fatal warning collected along the way (spec.md §7).
pub struct RunResult {
    pub corpus: Corpus,
    pub warnings: Vec<CoreError>,
}

/// Runs extraction over every command `compiledb` reports, using
/// `frontend` to parse each translation unit. One `Extractor` per TU
/// runs on the `rayon` global pool (spec.md §5); fragments are folded
/// into the final Corpus single-threadedly, in TU order.
pub fn run(
    compiledb: &dyn CompileDatabase,
    frontend: &(dyn Frontend + Sync),
    filters: &FilterPipeline,
) -> Result<RunResult, CoreError> {
    let commands = compiledb.commands()?;
    tracing::info!(tu_count = commands.len(), "starting extraction");

    let fragments: Vec<Result<CorpusFragment, CoreError>> = commands
        .par_iter()
        .map(|command| {
            let extractor = Extractor::new(filters);
            extractor.extract(frontend, command)
        })
        .collect();

    let mut corpus = Corpus::new();
    let mut warnings = Vec::new();
    for (command, result) in commands.iter().zip(fragments) {
        match result {
            Ok(fragment) => {
                warnings.extend(fragment.warnings);
                fold_into(&mut corpus, fragment.corpus, &mut warnings);
            }
            Err(err) => {
                tracing::warn!(file = %command.file.display(), error = %err, "translation unit skipped");
                warnings.push(err);
            }
        }
    }

    tracing::info!(symbol_count = corpus.len(), warning_count = warnings.len(), "extraction complete");
    Ok(RunResult { corpus, warnings })
}

/// Folds one TU fragment's symbols into the accumulating final Corpus,
/// applying the §4.4 merge rules whenever a symbol already exists (it was
/// seen in an earlier TU — e.g. a header-declared class).
fn fold_into(accumulator: &mut Corpus, fragment: Corpus, warnings: &mut Vec<CoreError>) {
    for info in fragment.iter_declaration_order() {
        if let Some(existing) = accumulator.get_mut(info.id()) {
            let mode = info.core().mode;
            if let Some(doc_text) = info.core().doc.brief() {
                if existing.core().doc.is_empty() {
                    existing.core_mut().doc.blocks.push(crate::domain::doc::Block::Brief(
                        doc_text.to_vec(),
                    ));
                } else if !info.core().doc.is_empty() {
                    warnings.push(CoreError::Warning(format!(
                        "duplicate doc comment discarded for symbol {}",
                        info.core().name
                    )));
                }
            }
            existing.core_mut().mode = existing.core().mode.join(mode);
            existing.core_mut().locations.extend(info.core().locations.clone());
            if info.core().def_loc.is_some() && existing.core().def_loc.is_none() {
                existing.core_mut().def_loc = info.core().def_loc.clone();
            }
            existing.merge_members_from(info);
        } else {
            accumulator.insert(info.clone());
        }
    }
}

/// Renders a finished Corpus with `renderer`, writing the result through
/// `out`.
pub fn render(
    corpus: &Corpus,
    config: &Config,
    renderer: &dyn Renderer,
    out: &mut dyn Write,
) -> Result<(), CoreError> {
    renderer.render(corpus, config, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::frontend::fake::{FakeDecl, FakeFrontend};
    use crate::domain::error::CoreError;
    use crate::domain::extraction_mode::ExtractionMode;
    use crate::domain::info::Access;
    use crate::domain::ports::CompileCommand;

    struct FixedCompileDatabase(Vec<CompileCommand>);
    impl CompileDatabase for FixedCompileDatabase {
        fn commands(&self) -> Result<Vec<CompileCommand>, CoreError> {
            Ok(self.0.clone())
        }
    }

    fn pipeline() -> FilterPipeline {
        FilterPipeline {
            exclude_rules: vec![],
            pattern_rules: vec![],
            in_scope_files: vec![],
            default_mode: ExtractionMode::Regular,
            extract_private: false,
        }
    }

    #[test]
    fn run_merges_two_translation_units() {
        let compiledb = FixedCompileDatabase(vec![
            CompileCommand {
                file: "a.cpp".into(),
                directory: ".".into(),
                arguments: vec![],
            },
            CompileCommand {
                file: "b.cpp".into(),
                directory: ".".into(),
                arguments: vec![],
            },
        ]);
        let frontend = FakeFrontend::new(vec![FakeDecl::function("foo", Access::Public)]);
        let filters = pipeline();
        let result = run(&compiledb, &frontend, &filters).unwrap();
        // Both TUs report the same `foo`; it should merge into one symbol,
        // alongside the bootstrapped global namespace.
        assert_eq!(result.corpus.len(), 2);
    }
}
