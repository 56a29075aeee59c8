pub mod generate;
pub mod prompt;
pub mod theme;

use anyhow::{Result, bail};
use clap::Args;
use rppgen_core::form::{Fase, Jenjang, Kurikulum, RppRequest};

/// Form fields as flags. Any provided flag pre-answers the matching prompt of
/// the interactive form.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Curriculum track
    #[arg(long, value_enum)]
    pub kurikulum: Option<Kurikulum>,

    /// Education level
    #[arg(long, value_enum)]
    pub jenjang: Option<Jenjang>,

    /// Learning phase (Kurikulum Merdeka only)
    #[arg(long, value_enum)]
    pub fase: Option<Fase>,

    /// Grade 1-12 (Kurikulum 2013/Darurat only)
    #[arg(long)]
    pub kelas: Option<String>,

    /// Subject (Mata Pelajaran)
    #[arg(long)]
    pub mapel: Option<String>,

    /// Topic (Materi Pembelajaran)
    #[arg(long)]
    pub materi: Option<String>,

    /// School name
    #[arg(long = "sekolah")]
    pub nama_sekolah: Option<String>,

    /// Author (Disusun Oleh)
    #[arg(long)]
    pub penyusun: Option<String>,
}

impl FormArgs {
    /// Apply the provided flags on top of the request. The track is applied
    /// first so its cohort reset cannot clobber an explicit --fase/--kelas.
    pub fn apply(&self, request: &mut RppRequest) -> Result<()> {
        if let Some(kurikulum) = self.kurikulum {
            if kurikulum != request.kurikulum {
                request.set_kurikulum(kurikulum);
            }
        }
        if let Some(jenjang) = self.jenjang {
            request.jenjang = jenjang;
        }
        if let Some(fase) = self.fase {
            request.fase = fase;
        }
        if let Some(kelas) = &self.kelas {
            match kelas.parse::<u8>() {
                Ok(n) if (1..=12).contains(&n) => request.kelas = n.to_string(),
                _ => bail!("--kelas harus berupa angka 1-12"),
            }
        }
        if let Some(mapel) = &self.mapel {
            request.mapel = mapel.clone();
        }
        if let Some(materi) = &self.materi {
            request.materi = materi.clone();
        }
        if let Some(nama_sekolah) = &self.nama_sekolah {
            request.nama_sekolah = nama_sekolah.clone();
        }
        if let Some(penyusun) = &self.penyusun {
            request.penyusun = penyusun.clone();
        }
        Ok(())
    }
}
