//! The main flow: form in, prompt out, one Gemini call, painted result.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use dialoguer::{Confirm, Input, Select};
use rppgen_core::config::constants::{defaults, messages};
use rppgen_core::form::{Fase, Jenjang, KELAS_OPTIONS, Kurikulum, RppRequest};
use rppgen_core::llm::GeminiProvider;
use rppgen_core::prefs::PreferenceStore;
use rppgen_core::render::render_blocks;
use rppgen_core::session::GeneratorSession;
use rppgen_core::ui::markdown::print_blocks;
use rppgen_core::ui::spinner::Spinner;

use crate::commands::FormArgs;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Copy the generated text to the clipboard without asking
    #[arg(long)]
    pub copy: bool,

    /// Skip the interactive form; use the defaults plus any provided flags
    #[arg(long)]
    pub no_input: bool,
}

pub async fn run(model: &str, api_key_env: &str, args: GenerateArgs) -> Result<()> {
    let store = PreferenceStore::open_default()?;
    let theme = store.load_theme()?;

    println!("{}", style(messages::APP_TITLE).cyan().bold());
    println!("{}", style(messages::APP_TAGLINE).dim());
    println!();

    let mut session = GeneratorSession::new();
    args.form.apply(session.request_mut())?;
    if !args.no_input {
        fill_form(session.request_mut())?;
    }

    let api_key = std::env::var(api_key_env)
        .or_else(|_| std::env::var(defaults::FALLBACK_API_KEY_ENV))
        .with_context(|| {
            format!(
                "Set {api_key_env} or {} in your environment",
                defaults::FALLBACK_API_KEY_ENV
            )
        })?;
    let provider = GeminiProvider::new(api_key);

    let spinner = Spinner::new(messages::SPINNER_WORKING);
    let submit = session.submit(&provider, model).await;
    spinner.finish_and_clear();
    submit?;

    if let Some(message) = session.error() {
        println!("{}", style(message).red().bold());
        return Ok(());
    }
    let Some(output) = session.output().map(str::to_owned) else {
        return Ok(());
    };

    println!("{}", style(session.title()).bold());
    println!();
    print_blocks(&render_blocks(&output), theme);

    let should_copy = args.copy
        || (!args.no_input
            && Confirm::new()
                .with_prompt("Salin teks RPP ke clipboard?")
                .default(false)
                .interact()?);
    if should_copy && session.copy_output_to_clipboard() {
        println!("{}", style(messages::COPY_SUCCESS).green());
    }

    Ok(())
}

fn fill_form(request: &mut RppRequest) -> Result<()> {
    let kurikulum_labels: Vec<&str> = Kurikulum::ALL.iter().map(|k| k.label()).collect();
    let current = Kurikulum::ALL
        .iter()
        .position(|k| *k == request.kurikulum)
        .unwrap_or(0);
    let pick = Select::new()
        .with_prompt("Kurikulum")
        .items(&kurikulum_labels)
        .default(current)
        .interact()?;
    let chosen = Kurikulum::ALL[pick];
    if chosen != request.kurikulum {
        request.set_kurikulum(chosen);
    }

    let jenjang_labels: Vec<&str> = Jenjang::ALL.iter().map(|j| j.label()).collect();
    let current = Jenjang::ALL
        .iter()
        .position(|j| *j == request.jenjang)
        .unwrap_or(0);
    let pick = Select::new()
        .with_prompt("Jenjang Pendidikan")
        .items(&jenjang_labels)
        .default(current)
        .interact()?;
    request.jenjang = Jenjang::ALL[pick];

    // Only the cohort selector for the chosen track is shown; the other
    // field keeps its default.
    if request.uses_fase() {
        let fase_labels: Vec<&str> = Fase::ALL.iter().map(|f| f.description()).collect();
        let current = Fase::ALL
            .iter()
            .position(|f| *f == request.fase)
            .unwrap_or(0);
        let pick = Select::new()
            .with_prompt("Fase")
            .items(&fase_labels)
            .default(current)
            .interact()?;
        request.fase = Fase::ALL[pick];
    } else {
        let kelas_labels: Vec<String> = KELAS_OPTIONS
            .iter()
            .map(|k| format!("Kelas {k}"))
            .collect();
        let current = KELAS_OPTIONS
            .iter()
            .position(|k| *k == request.kelas)
            .unwrap_or(0);
        let pick = Select::new()
            .with_prompt("Kelas")
            .items(&kelas_labels)
            .default(current)
            .interact()?;
        request.kelas = KELAS_OPTIONS[pick].to_string();
    }

    request.mapel = required_input("Mata Pelajaran", &request.mapel)?;
    request.materi = required_input("Materi Pembelajaran", &request.materi)?;
    request.nama_sekolah = required_input("Nama Sekolah", &request.nama_sekolah)?;
    request.penyusun = required_input("Disusun Oleh", &request.penyusun)?;

    Ok(())
}

fn required_input(prompt: &str, initial: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .default(initial.to_string())
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("kolom ini wajib diisi")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}
