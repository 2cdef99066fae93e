//! CRS description command

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::coordinate::{Crs, SpatialReference};
use crate::errors::{FeatureError, FeatureResult};
use crate::utils::logger::Logger;

/// Command that prints what the registry knows about a CRS
pub struct DescribeCommand<'a> {
    crs: Crs,
    logger: &'a Logger,
}

impl<'a> DescribeCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> FeatureResult<Self> {
        let crs_str = args.get_one::<String>("describe")
            .ok_or_else(|| FeatureError::GenericError("Missing CRS to describe".to_string()))?;

        Ok(DescribeCommand {
            crs: Crs::from_string(crs_str)?,
            logger,
        })
    }

    /// Multi-line description of the CRS
    pub fn describe(crs: &Crs) -> String {
        let mut lines = vec![
            format!("Name:        {}", crs.name()),
            format!("EPSG:        {}", crs.epsg()),
        ];

        if let Some(definition) = crs.definition() {
            let ellipsoid = &definition.ellipsoid;
            lines.push(format!("Projection:  {}", definition.projection.kind_name()));
            lines.push(format!("Geographic:  {}", crs.is_geographic()));
            lines.push(format!("Ellipsoid:   {}", ellipsoid.name));
            lines.push(format!("  Semi-major axis: {} m", ellipsoid.semi_major));
            lines.push(format!("  Semi-minor axis: {:.4} m", ellipsoid.semi_minor()));
            if ellipsoid.flattening > 0.0 {
                lines.push(format!("  Inverse flattening: {}", 1.0 / ellipsoid.flattening));
            }
            if let Some(limit) = definition.max_latitude {
                lines.push(format!("Latitude limit: +/-{} deg", limit));
            }
        }

        lines.join("\n")
    }
}

impl<'a> Command for DescribeCommand<'a> {
    fn execute(&self) -> FeatureResult<()> {
        let description = Self::describe(&self.crs);
        println!("{}", description);
        self.logger.log(&description)?;
        Ok(())
    }
}
