//! Two-locale string tables for the launcher UI
//!
//! Every user-visible label lives here so the whole surface swaps when the
//! language changes, without a restart.

use serde::{Deserialize, Serialize};

/// Locale labels shown in the language selector. These two are fixed and
/// never translated themselves.
pub const LANG_PT_LABEL: &str = "Português (Brasil)";
pub const LANG_EN_LABEL: &str = "Inglês (USA)";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    #[serde(rename = "pt")]
    Pt,
    #[serde(rename = "en")]
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Pt, Language::En];

    /// Label used in the language selector for this locale.
    pub fn selector_label(self) -> &'static str {
        match self {
            Language::Pt => LANG_PT_LABEL,
            Language::En => LANG_EN_LABEL,
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::Pt => &PT,
            Language::En => &EN,
        }
    }
}

/// Static label table for one locale.
pub struct Strings {
    pub tab_launcher: &'static str,
    pub tab_settings: &'static str,
    pub engine_label: &'static str,
    pub play: &'static str,
    pub add_mod: &'static str,
    pub del_mod: &'static str,
    pub save_btn: &'static str,
    pub save_success: &'static str,
    pub save_error: &'static str,
    pub no_version: &'static str,
    pub default_ver: &'static str,
    pub lang_label: &'static str,
    pub theme_label: &'static str,
    pub dark_mode: &'static str,
    pub light_mode: &'static str,
    pub confirm_title: &'static str,
    pub confirm_del: &'static str,
    pub confirm_yes: &'static str,
    pub confirm_no: &'static str,
    pub error_exe: &'static str,
    pub error_exe_multiple: &'static str,
    pub error_launch: &'static str,
    pub error_mod_exists: &'static str,
    pub error_mod_add: &'static str,
    pub error_mod_del: &'static str,
}

static PT: Strings = Strings {
    tab_launcher: "Launcher",
    tab_settings: "Configurações",
    engine_label: "Engine:",
    play: "INICIAR JOGO",
    add_mod: "Adicionar Mod",
    del_mod: "Deletar Mod",
    save_btn: "Salvar",
    save_success: "Configurações salvas!",
    save_error: "Falha ao salvar as configurações.",
    no_version: "Sem versões",
    default_ver: "Padrão (Launcher)",
    lang_label: "Idioma:",
    theme_label: "Tema:",
    dark_mode: "Escuro",
    light_mode: "Claro",
    confirm_title: "Confirmar",
    confirm_del: "Deletar este mod?",
    confirm_yes: "Sim",
    confirm_no: "Não",
    error_exe: "Executável não encontrado.",
    error_exe_multiple: "Vários executáveis encontrados na pasta da versão.",
    error_launch: "Falha ao iniciar o jogo.",
    error_mod_exists: "Já existe um mod com esse nome.",
    error_mod_add: "Falha ao adicionar o mod.",
    error_mod_del: "Falha ao deletar o mod.",
};

static EN: Strings = Strings {
    tab_launcher: "Launcher",
    tab_settings: "Settings",
    engine_label: "Engine:",
    play: "START GAME",
    add_mod: "Add Mod",
    del_mod: "Delete Mod",
    save_btn: "Save",
    save_success: "Settings saved!",
    save_error: "Failed to save settings.",
    no_version: "No versions",
    default_ver: "Default (Launcher)",
    lang_label: "Language:",
    theme_label: "Theme:",
    dark_mode: "Dark",
    light_mode: "Light",
    confirm_title: "Confirm",
    confirm_del: "Delete mod?",
    confirm_yes: "Yes",
    confirm_no: "No",
    error_exe: "Executable not found.",
    error_exe_multiple: "Multiple executables found in the version folder.",
    error_launch: "Failed to start the game.",
    error_mod_exists: "A mod with that name already exists.",
    error_mod_add: "Failed to add mod.",
    error_mod_del: "Failed to delete mod.",
};
