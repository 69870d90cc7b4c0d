//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use touchtile::app::AppConfig;
use touchtile::color::Color;
use touchtile::layout::{AbsolutePolicy, HandlePlacement};

/// Split terminal frames with the mouse: left click stacks, right click
/// places side by side
#[derive(Parser, Debug)]
#[command(name = "touchtile")]
#[command(author, version, about)]
pub struct Cli {
    /// Seed for new frame colors (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where edge handles sit along a split boundary
    #[arg(long, default_value = "child-midpoint", value_enum)]
    pub handle_placement: PlacementArg,

    /// How fixed-size frames share space with ratio siblings
    #[arg(long, default_value = "reserve", value_enum)]
    pub absolute_policy: PolicyArg,

    /// Edge handle diameter in cells (0 hides the handles)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i32).range(0..=256))]
    pub handle_size: i32,

    /// Edge handle color as #rrggbb or #rgb
    #[arg(long)]
    pub handle_color: Option<Color>,

    /// Background color as #rrggbb or #rgb
    #[arg(long)]
    pub clear_color: Option<Color>,

    /// Write logs to this file (the terminal is busy drawing)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start with a single frame instead of the demo layout
    #[arg(long)]
    pub blank: bool,
}

/// Edge handle placement options
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlacementArg {
    /// Centered on the later frame's side of the boundary
    ChildMidpoint,
    /// Centered on the parent's midline
    ParentMidline,
}

/// Absolute sizing policy options
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Fixed sizes are reserved first, ratio frames share the rest
    Reserve,
    /// Ratio frames share the full extent; may overflow
    Literal,
}

impl From<PlacementArg> for HandlePlacement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::ChildMidpoint => HandlePlacement::ChildMidpoint,
            PlacementArg::ParentMidline => HandlePlacement::ParentMidline,
        }
    }
}

impl From<PolicyArg> for AbsolutePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Reserve => AbsolutePolicy::Reserve,
            PolicyArg::Literal => AbsolutePolicy::Literal,
        }
    }
}

impl Cli {
    /// Map the parsed flags onto an [`AppConfig`].
    pub fn to_config(&self) -> AppConfig {
        let mut config = AppConfig::new()
            .with_placement(self.handle_placement.into())
            .with_absolute_policy(self.absolute_policy.into())
            .with_handle_diameter(self.handle_size)
            .blank(self.blank);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(color) = self.handle_color {
            config = config.with_handle_color(color);
        }
        if let Some(color) = self.clear_color {
            config = config.with_clear_color(color);
        }
        config
    }
}
