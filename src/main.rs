use anyhow::{Context, Result};
use clap::Parser;
use cxxdoc_extract::adapters::compiledb::JsonCompileDatabase;
use cxxdoc_extract::adapters::render::{tagfile::TagfileRenderer, xml::XmlRenderer};
use cxxdoc_extract::app::engine;
use cxxdoc_extract::cli::{self, Cli, Command};
use cxxdoc_extract::domain::config::OutputFormat;
use cxxdoc_extract::domain::ports::Renderer;

#[cfg(feature = "clang-frontend")]
use cxxdoc_extract::adapters::frontend::clang_frontend::ClangFrontend;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(&cli.log_level);

    let loaded = cli::load_config(cli.config.as_deref());
    let loaded = match loaded {
        Ok(l) => l,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(cli::exit_code_for(&err));
        }
    };
    for warning in &loaded.warnings {
        tracing::warn!("{warning}");
    }

    match cli.command {
        Command::CheckConfig => {
            println!("configuration OK ({} warning(s))", loaded.warnings.len());
            Ok(())
        }
        #[cfg(not(feature = "clang-frontend"))]
        Command::Extract { .. } => {
            anyhow::bail!(
                "this build was compiled without the clang-frontend feature; \
                 rebuild with default features to extract from real sources"
            );
        }
        #[cfg(feature = "clang-frontend")]
        Command::Extract { compile_commands } => {
            let filters = cli::default_filters(&loaded.config);
            let compiledb = JsonCompileDatabase::new(compile_commands, Vec::new());
            let frontend = ClangFrontend::new();

            let run_result =
                engine::run(&compiledb, &frontend, &filters).context("extraction failed")?;
            for warning in &run_result.warnings {
                tracing::warn!("{warning}");
            }

            std::fs::create_dir_all(&loaded.config.output_dir)
                .context("failed to create output directory")?;
            let renderer: Box<dyn Renderer> = match loaded.config.format {
                OutputFormat::Xml => Box::new(XmlRenderer),
                OutputFormat::Tagfile => Box::new(TagfileRenderer),
            };
            let out_path = loaded.config.output_dir.join(match loaded.config.format {
                OutputFormat::Xml => "index.xml",
                OutputFormat::Tagfile => "index.tag",
            });
            let mut out_file = std::fs::File::create(&out_path)
                .with_context(|| format!("failed to create {}", out_path.display()))?;
            engine::render(&run_result.corpus, &loaded.config, renderer.as_ref(), &mut out_file)
                .context("rendering failed")?;

            println!(
                "extracted {} symbols -> {}",
                run_result.corpus.len(),
                out_path.display()
            );
            Ok(())
        }
    }
}
