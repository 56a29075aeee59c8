//! Shows or changes the persisted display theme.

use anyhow::Result;
use clap::{Args, ValueEnum};
use console::style;
use rppgen_core::prefs::PreferenceStore;
use rppgen_core::ui::theme::Theme;

#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// light, dark, or toggle; omit to show the current theme
    #[arg(value_enum)]
    pub action: Option<ThemeAction>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

pub fn run(args: ThemeArgs) -> Result<()> {
    let store = PreferenceStore::open_default()?;
    let theme = match args.action {
        None => store.load_theme()?,
        Some(ThemeAction::Light) => {
            store.save_theme(Theme::Light)?;
            Theme::Light
        }
        Some(ThemeAction::Dark) => {
            store.save_theme(Theme::Dark)?;
            Theme::Dark
        }
        Some(ThemeAction::Toggle) => store.toggle_theme()?,
    };
    println!("tema aktif: {}", style(theme.label()).bold());
    Ok(())
}
