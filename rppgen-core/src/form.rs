//! The lesson-plan request record and its curriculum-conditional field rules.
//!
//! The curriculum track decides which cohort selector is active: Kurikulum
//! Merdeka works with a phase (Fase A-F), the 2013 and Darurat tracks work
//! with a grade (Kelas 1-12). The inactive field keeps its value but is
//! ignored by the prompt builder.

use clap::ValueEnum;
use std::fmt;

/// National curriculum track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kurikulum {
    #[value(name = "merdeka")]
    Merdeka,
    #[value(name = "2013", alias = "k13")]
    K2013,
    #[value(name = "darurat")]
    Darurat,
}

impl Kurikulum {
    pub const ALL: [Kurikulum; 3] = [Kurikulum::Merdeka, Kurikulum::K2013, Kurikulum::Darurat];

    pub fn label(self) -> &'static str {
        match self {
            Kurikulum::Merdeka => "Kurikulum Merdeka",
            Kurikulum::K2013 => "Kurikulum 2013",
            Kurikulum::Darurat => "Kurikulum Darurat",
        }
    }
}

impl fmt::Display for Kurikulum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Jenjang {
    #[value(name = "sd")]
    Sd,
    #[value(name = "smp")]
    Smp,
    #[value(name = "sma-smk", alias = "sma")]
    SmaSmk,
}

impl Jenjang {
    pub const ALL: [Jenjang; 3] = [Jenjang::Sd, Jenjang::Smp, Jenjang::SmaSmk];

    pub fn label(self) -> &'static str {
        match self {
            Jenjang::Sd => "SD",
            Jenjang::Smp => "SMP",
            Jenjang::SmaSmk => "SMA/SMK",
        }
    }
}

impl fmt::Display for Jenjang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Learning phase, used by Kurikulum Merdeka instead of a grade number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fase {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Fase {
    pub const ALL: [Fase; 6] = [Fase::A, Fase::B, Fase::C, Fase::D, Fase::E, Fase::F];

    pub fn label(self) -> &'static str {
        match self {
            Fase::A => "A",
            Fase::B => "B",
            Fase::C => "C",
            Fase::D => "D",
            Fase::E => "E",
            Fase::F => "F",
        }
    }

    /// Selector label including the grade range the phase covers.
    pub fn description(self) -> &'static str {
        match self {
            Fase::A => "Fase A (Kelas 1-2 SD)",
            Fase::B => "Fase B (Kelas 3-4 SD)",
            Fase::C => "Fase C (Kelas 5-6 SD)",
            Fase::D => "Fase D (Kelas 7-9 SMP)",
            Fase::E => "Fase E (Kelas 10 SMA/SMK)",
            Fase::F => "Fase F (Kelas 11-12 SMA/SMK)",
        }
    }
}

impl fmt::Display for Fase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grade options for the non-Merdeka tracks.
pub const KELAS_OPTIONS: [&str; 12] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// A required free-text field was left empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("kolom wajib belum diisi: {0}")]
pub struct MissingField(pub &'static str);

/// The lesson-plan request as filled in by the user.
///
/// Created with fixed defaults, mutated field by field, read once at submit
/// time. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RppRequest {
    pub kurikulum: Kurikulum,
    pub jenjang: Jenjang,
    pub fase: Fase,
    pub kelas: String,
    pub mapel: String,
    pub materi: String,
    pub nama_sekolah: String,
    pub penyusun: String,
}

impl Default for RppRequest {
    fn default() -> Self {
        Self {
            kurikulum: Kurikulum::Merdeka,
            jenjang: Jenjang::Smp,
            fase: Fase::D,
            kelas: "7".to_string(),
            mapel: "Informatika".to_string(),
            materi: "Sistem Komputer dan Komponennya".to_string(),
            nama_sekolah: "SMP Negeri 1 Indonesia".to_string(),
            penyusun: "Tim Guru Cerdas".to_string(),
        }
    }
}

impl RppRequest {
    /// Whether the active cohort selector is the phase (vs. the grade).
    pub fn uses_fase(&self) -> bool {
        matches!(self.kurikulum, Kurikulum::Merdeka)
    }

    /// Change the curriculum track. Resets both cohort selectors to their
    /// defaults (Fase A, Kelas 1) so a stale value from the other track
    /// cannot leak into the prompt.
    pub fn set_kurikulum(&mut self, kurikulum: Kurikulum) {
        self.kurikulum = kurikulum;
        self.fase = Fase::A;
        self.kelas = "1".to_string();
    }

    /// Required-field presence check for the free-text fields.
    pub fn validate(&self) -> Result<(), MissingField> {
        let required: [(&str, &'static str); 4] = [
            (&self.mapel, "Mata Pelajaran"),
            (&self.materi, "Materi Pembelajaran"),
            (&self.nama_sekolah, "Nama Sekolah"),
            (&self.penyusun, "Disusun Oleh"),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                return Err(MissingField(label));
            }
        }
        Ok(())
    }
}
