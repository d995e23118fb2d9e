use anyhow::{Context, Result};
use futures::future;
use std::time::Instant;

use crate::models::{ConversionOptions, ConversionSummary};
use crate::services::compiler::SourceCompiler;
use crate::services::fs_gateway::FilesystemGateway;
use crate::services::generators;
use crate::services::provider::IconDefinitionProvider;

/// Base name of the optional aggregate module.
const COMPLETE_ICON_SET_NAME: &str = "completeIconSet";

/// The conversion pipeline.
///
/// Drives one conversion run end to end: clean the icons folder, acquire the
/// definitions, emit one module per icon as a concurrent write batch, compose
/// the barrel and optional aggregate/model files, and optionally compile and
/// prune the generated sources.
///
/// The pipeline is fail-fast and non-recovering: the first error from any
/// stage aborts the run, and whatever partial output exists at that point is
/// left in place. A retry means re-running the whole pipeline; the
/// unconditional clean in step one makes that safe.
pub struct ConversionPipeline<P, C> {
    provider: P,
    compiler: C,
    fs: FilesystemGateway,
}

impl<P, C> ConversionPipeline<P, C>
where
    P: IconDefinitionProvider,
    C: SourceCompiler,
{
    pub fn new(provider: P, compiler: C) -> Self {
        Self {
            provider,
            compiler,
            fs: FilesystemGateway::new(),
        }
    }

    /// Run one conversion. Steps are strictly ordered; only the per-icon
    /// writes inside step three run concurrently.
    pub async fn convert(&self, options: &ConversionOptions) -> Result<ConversionSummary> {
        let start = Instant::now();
        let icons_folder = options.icons_folder_path();

        // Step 1: unconditionally clear stale output from previous runs.
        tracing::info!("deleting output directory: {icons_folder}");
        self.fs.delete_folder(&icons_folder).await?;

        // Step 2: acquire the ordered definitions. An empty set is valid.
        let definitions = self
            .provider
            .provide_definitions(options)
            .context("Icon discovery failed")?;
        tracing::info!("processing {} icon definitions", definitions.len());

        // Step 3: fan out the per-icon writes. Each base name is recorded
        // before its write future exists, so the accumulation list follows
        // enumeration order no matter how the writes complete.
        let mut generated_file_names: Vec<String> = Vec::with_capacity(definitions.len() + 1);
        let fs = &self.fs;
        let mut writes = Vec::with_capacity(definitions.len());

        for definition in &definitions {
            let constant = generators::svg_constant(
                &definition.variable_name,
                &definition.type_name,
                &definition.icon_key(),
                &definition.data,
            );
            let generated_file_name = definition.generated_file_name();
            generated_file_names.push(generated_file_name.clone());

            let target_folder = icons_folder.clone();
            writes.push(async move {
                fs.write_file(&target_folder, &generated_file_name, &constant)
                    .await
            });
        }

        // Settle the whole batch before surfacing any failure.
        for result in future::join_all(writes).await {
            result?;
        }

        // Step 4: optional aggregate module, even for an empty set.
        let mut complete_icon_set_written = false;
        if options.export_complete_icon_set {
            let content = generators::complete_icon_set_content(&definitions);
            generated_file_names.push(COMPLETE_ICON_SET_NAME.to_string());
            self.fs
                .write_file(&icons_folder, COMPLETE_ICON_SET_NAME, &content)
                .await?;
            complete_icon_set_written = true;
        }

        // Step 5: compose and write the barrel file.
        let mut barrel_content = generators::type_helper_with_import(
            &options.interface_name,
            &options.icons_folder_name,
            options.model_file_name.as_deref(),
        );
        for generated_file_name in &generated_file_names {
            barrel_content.push_str(&generators::export_statement(
                generated_file_name,
                &options.icons_folder_name,
            ));
        }
        if let Some(model_file_name) = &options.model_file_name {
            barrel_content.push_str(&generators::export_statement(
                model_file_name,
                &options.icons_folder_name,
            ));
        }
        self.fs
            .write_file(
                &options.output_directory,
                &options.barrel_file_name,
                &barrel_content,
            )
            .await?;

        // Step 6: optional model file, duplicated to the additional path.
        let mut model_written = false;
        if let Some(model_file_name) = &options.model_file_name {
            let model_content = format!(
                "{}{}",
                generators::type_definition(&options.type_name, &definitions),
                generators::interface_definition(&options.interface_name, &options.type_name),
            );
            self.fs
                .write_file(&icons_folder, model_file_name, &model_content)
                .await?;
            tracing::info!("model file generated under {icons_folder}/{model_file_name}.ts");

            if let Some(additional_path) = &options.additional_model_output_path {
                self.fs
                    .write_file(additional_path, model_file_name, &model_content)
                    .await?;
                tracing::info!(
                    "additional model file generated under {additional_path}/{model_file_name}.ts"
                );
            }
            model_written = true;
        }

        // Step 7: optional compile-and-prune. Sources are deleted only after
        // the compiler succeeded.
        let mut sources_pruned = false;
        if options.compile_sources {
            let patterns = vec![
                format!("{icons_folder}/*.ts"),
                format!(
                    "{}/{}.ts",
                    options.output_directory, options.barrel_file_name
                ),
            ];
            let generated_paths = self.fs.resolve_paths(&patterns)?;

            self.compiler
                .compile(&generated_paths)
                .context("Compiling generated sources failed")?;
            tracing::info!("compiled generated sources, pruning {} files", generated_paths.len());

            self.fs.delete_files(&generated_paths).await?;
            sources_pruned = true;
        }

        Ok(ConversionSummary {
            icons_written: definitions.len(),
            complete_icon_set_written,
            model_written,
            sources_pruned,
            output_directory: options.output_directory.clone(),
            duration: start.elapsed(),
        })
    }
}
