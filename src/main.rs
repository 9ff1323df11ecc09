// src/main.rs
//
// Calculatrice multi-fonctions — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------------------
// - NATIF (Linux/Windows/macOS) : clap + journal + eframe::run_native
//   (une sous-commande = calcul sans fenêtre)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

mod app;
mod config;
mod noyau;

#[cfg(not(target_arch = "wasm32"))]
mod cli;

use app::AppCalc;
use config::Config;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice multi-fonctions";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    init_journal(cli.verbose);

    let config = Config::charger(cli.config.as_deref())?;

    match cli.commande {
        Some(cmd) => {
            let ligne = cli::executer(cmd, &config)?;
            println!("{ligne}");
            Ok(())
        }
        None => lancer_fenetre(config),
    }
}

/// RUST_LOG prioritaire, sinon niveau selon -v.
#[cfg(not(target_arch = "wasm32"))]
fn init_journal(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let niveau = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(niveau));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(target_arch = "wasm32"))]
fn lancer_fenetre(config: Config) -> anyhow::Result<()> {
    use eframe::egui;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([560.0, 520.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    tracing::info!(onglet = ?config.onglet, "ouverture de la fenêtre");

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(&config)))),
    )
    .map_err(|e| anyhow::anyhow!("échec de la fenêtre : {e}"))
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, Config, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (configuration par défaut)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(AppCalc::new(&Config::default())))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
