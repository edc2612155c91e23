use clap::{Parser, ValueEnum};
use lens_core::constants::{
    DEFAULT_FOCAL_LENGTH_CM, DEFAULT_OBJECT_DISTANCE_CM, DEFAULT_SCREEN_DISTANCE_CM,
};
use lens_core::Locale;
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Lang {
    Ja,
    En,
}

impl From<Lang> for Locale {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::Ja => Locale::Ja,
            Lang::En => Locale::En,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lens-native")]
#[command(about = "Solve a thin convex lens setup and describe the image it forms")]
pub struct Args {
    /// Distance from the object to the lens, in cm
    #[arg(long, short = 'a', default_value_t = DEFAULT_OBJECT_DISTANCE_CM)]
    pub object: f64,

    /// Focal length of the lens, in cm
    #[arg(long, short = 'f', default_value_t = DEFAULT_FOCAL_LENGTH_CM)]
    pub focal: f64,

    /// Distance from the lens to the screen, in cm
    #[arg(long, short = 's', default_value_t = DEFAULT_SCREEN_DISTANCE_CM)]
    pub screen: f64,

    /// Label language for the report and diagram
    #[arg(long, value_enum, default_value = "en")]
    pub locale: Lang,

    /// Annotate the diagram with distances and print the layout in the report
    #[arg(long)]
    pub detail: bool,

    /// Leave the principal rays out of the diagram
    #[arg(long)]
    pub no_rays: bool,

    /// Print the SVG diagram to stdout instead of the text report
    #[arg(long)]
    pub svg: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}
