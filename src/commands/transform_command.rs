//! Feature transform command
//!
//! Reads text encoded features, runs them through a `TransformFilter`
//! and writes the result to stdout.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::config::TransformConfig;
use crate::coordinate::{BoundingBox, Crs, SpatialReference};
use crate::errors::{FeatureError, FeatureResult};
use crate::feature::{Feature, FeatureProfile, FilterContext};
use crate::filters::{FeatureFailure, FeatureFilter, FilterOutput, TransformFilter};
use crate::utils::feature_text::{self, ParsedFeatures};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Features pushed through the filter per progress update
const CHUNK_SIZE: usize = 256;

/// Command for transforming features between reference systems
pub struct TransformCommand<'a> {
    /// Input path, "-" for stdin
    input: String,
    /// Resolved run settings
    config: TransformConfig,
    /// Show a progress bar
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> TransformCommand<'a> {
    /// Create a new transform command
    ///
    /// Values from `--config` are loaded first, then overridden by flags.
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> FeatureResult<Self> {
        let mut config = match args.get_one::<String>("config") {
            Some(path) => TransformConfig::from_file(path)?,
            None => TransformConfig::default(),
        };

        if let Some(source) = args.get_one::<String>("from") {
            config.source = Some(source.clone());
        }
        if let Some(target) = args.get_one::<String>("to") {
            config.target = Some(target.clone());
        }
        if let Some(geometry) = args.get_one::<String>("geometry") {
            config.geometry = geometry.parse()?;
        }
        if args.get_flag("geocentric") {
            config.geocentric = true;
        }
        if args.get_flag("multi") {
            config.multi = true;
        }

        let input = args.get_one::<String>("input")
            .cloned()
            .unwrap_or_else(|| "-".to_string());

        Ok(TransformCommand {
            input,
            config,
            verbose: args.get_flag("verbose"),
            logger,
        })
    }

    /// Create a command directly from settings
    pub fn from_config(input: &str, config: TransformConfig, logger: &'a Logger) -> Self {
        TransformCommand {
            input: input.to_string(),
            config,
            verbose: false,
            logger,
        }
    }

    /// Transform every feature read from `reader` and write them to `writer`
    ///
    /// # Returns
    /// The merged filter output for the whole input
    pub fn run<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> FeatureResult<FilterOutput> {
        let source = self.resolve_crs(self.config.source.as_deref(), "source", "--from")?;
        let target = self.resolve_crs(self.config.target.as_deref(), "target", "--to")?;

        if self.config.geocentric && !target.is_geographic() {
            warn!("Geocentric output requested but {} is not geographic; output stays projected", target);
        }

        let ParsedFeatures { mut features, dimensionality } = feature_text::parse_features(reader)?;
        let dimensionality = self.config.dimensionality.unwrap_or(dimensionality);
        info!("Read {} features ({}D) from {}", features.len(), dimensionality, self.input);

        let profile = FeatureProfile::new(
            source.shared(),
            self.config.geometry,
            dimensionality,
            self.config.multi,
        );
        let context = FilterContext::new(profile);
        let filter = TransformFilter::new(target.shared(), self.config.geocentric);

        let output = self.push_in_chunks(&filter, &mut features, &context);

        let output_dims = if output.context.is_geocentric() { 3 } else { dimensionality };
        self.write_features(writer, &features, &output, output_dims)?;

        self.logger.log_batch_summary(features.len(), &output.failures)?;
        Ok(output)
    }

    fn resolve_crs(&self, value: Option<&str>, key: &str, flag: &str) -> FeatureResult<Crs> {
        let value = value.ok_or_else(|| FeatureError::GenericError(
            format!("Missing {} CRS. Use {} or transform.{} in the config file", key, flag, key)))?;
        Crs::from_string(value)
    }

    fn push_in_chunks(&self, filter: &TransformFilter, features: &mut [Feature], context: &FilterContext) -> FilterOutput {
        let progress = if self.verbose {
            ProgressTracker::new(features.len() as u64, "transforming")
        } else {
            ProgressTracker::hidden()
        };

        let mut failures: Vec<FeatureFailure> = Vec::new();
        let mut extent: Option<BoundingBox> = None;
        let mut last_context = None;

        for (chunk_index, chunk) in features.chunks_mut(CHUNK_SIZE).enumerate() {
            let chunk_len = chunk.len();
            let output = filter.push(chunk, context);

            let offset = chunk_index * CHUNK_SIZE;
            failures.extend(output.failures.into_iter().map(|mut failure| {
                failure.index += offset;
                failure
            }));

            if let Some(chunk_extent) = output.context.extent() {
                extent = Some(match extent {
                    Some(current) => current.union(chunk_extent),
                    None => *chunk_extent,
                });
            }
            last_context = Some(output.context);
            progress.increment(chunk_len as u64);
        }
        progress.finish();

        // An empty input still yields the output frame
        let context = match last_context {
            Some(context) => context,
            None => filter.push(&mut [], context).context,
        };

        FilterOutput {
            context: context.with_extent(extent),
            failures,
        }
    }

    fn write_features<W: Write>(&self, writer: &mut W, features: &[Feature], output: &FilterOutput, dims: u32) -> FeatureResult<()> {
        let mut failures = output.failures.iter().peekable();

        for (index, feature) in features.iter().enumerate() {
            match failures.peek() {
                Some(failure) if failure.index == index => {
                    writeln!(writer, "# failed {}: {}", failure.feature_id, failure.error)?;
                    eprintln!("Feature {} failed: {}", failure.feature_id, failure.error);
                    failures.next();
                },
                _ => {
                    writeln!(writer, "{}", feature_text::format_feature(feature, dims, self.config.precision))?;
                },
            }
        }

        writer.flush()?;
        Ok(())
    }
}

impl<'a> Command for TransformCommand<'a> {
    fn execute(&self) -> FeatureResult<()> {
        let stdout = io::stdout();
        let mut writer = stdout.lock();

        let output = if self.input == "-" {
            let stdin = io::stdin();
            self.run(stdin.lock(), &mut writer)?
        } else {
            let file = File::open(&self.input)?;
            self.run(BufReader::new(file), &mut writer)?
        };

        if output.is_complete() {
            info!("Transform successful");
        } else {
            warn!("{} features failed to transform", output.failures.len());
        }
        if let Some(extent) = output.context.extent() {
            info!("Output extent: ({}, {}, {}) - ({}, {}, {})",
                  extent.min_x, extent.min_y, extent.min_z,
                  extent.max_x, extent.max_y, extent.max_z);
        }

        Ok(())
    }
}
