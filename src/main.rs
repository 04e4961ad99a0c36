//! EDA Canvas Editor Core: Session-Replay.
//!
//! Lädt Dokument, Library, Dialog-Antworten und eine Event-Liste aus einer
//! JSON-Session, spielt sie durch den Tool-Controller und gibt das
//! resultierende Dokument als JSON aus. Ohne Argument läuft eine Demo.

use std::path::Path;

use anyhow::Context;
use eda_editor_core::app::ToolArgs;
use eda_editor_core::core::{Coordi, Document, MemoryLibrary, Polygon, SelectableRef};
use eda_editor_core::{AppState, EditorOptions, ObjectType, ScriptedDialogs, ToolController, ToolId};
use serde::Deserialize;

/// Eine aufgezeichnete Editier-Session.
#[derive(Debug, Deserialize)]
struct Session {
    #[serde(default)]
    document: Document,
    #[serde(default)]
    library: MemoryLibrary,
    #[serde(default)]
    dialogs: ScriptedDialogs,
    /// Selektion vor dem Tool-Start
    #[serde(default)]
    selection: Vec<SelectableRef>,
    tool: ToolId,
    #[serde(default)]
    begin_at: Coordi,
    #[serde(default)]
    events: Vec<ToolArgs>,
}

impl Session {
    fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Session-Datei nicht lesbar: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Session-Datei fehlerhaft: {}", path.display()))
    }

    /// Quadrat mit selektierter Ecke, per Dialog auf Radius 20 abgerundet.
    fn demo() -> Self {
        let mut document = Document::new();
        document.add_polygon(Polygon::from_positions(
            1,
            0,
            &[
                Coordi::new(0, 0),
                Coordi::new(100, 0),
                Coordi::new(100, 100),
                Coordi::new(0, 100),
            ],
        ));
        Self {
            document,
            library: MemoryLibrary::new(),
            dialogs: ScriptedDialogs::new().with_datum(Some(20.0)),
            selection: vec![SelectableRef::with_vertex(1, ObjectType::PolygonVertex, 0)],
            tool: ToolId::RoundOffVertex,
            begin_at: Coordi::ZERO,
            events: vec![
                ToolArgs::moved(Coordi::new(10, 10)),
                ToolArgs::key(eda_editor_core::app::Key::Return, Coordi::new(10, 10)),
            ],
        }
    }
}

fn run(session: Session, options: EditorOptions) -> anyhow::Result<Document> {
    let mut state = AppState::new(
        session.document,
        Box::new(session.library),
        Box::new(session.dialogs),
        options,
    );
    state
        .doc
        .selection_mut()
        .ids_mut()
        .extend(session.selection);
    state.refresh_canvas();

    let mut controller = ToolController::new();
    let response = controller.begin_tool(&mut state, session.tool, &ToolArgs::begin(session.begin_at))?;
    log::info!("begin {:?} → {:?}", session.tool, response);

    for args in &session.events {
        if !controller.is_active() {
            log::warn!("Kein aktives Tool mehr, {:?} wird ignoriert", args.event);
            continue;
        }
        let response = controller.handle_event(&mut state, args)?;
        log::debug!("{:?} → {:?}", args.event, response);
    }
    if controller.is_active() {
        log::warn!(
            "Session endet mit aktivem Tool {:?}, verwerfe",
            controller.active_tool_id()
        );
        controller.abort(&mut state);
    }

    for flash in state.tool_bar.flashes() {
        log::info!("Flash: {}", flash);
    }
    Ok(state.doc.document().clone())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("EDA Canvas Editor Core v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let session = match std::env::args().nth(1) {
        Some(path) => Session::load(Path::new(&path))?,
        None => {
            log::info!("Keine Session angegeben, starte Demo");
            Session::demo()
        }
    };

    let document = run(session, options)?;
    let json = serde_json::to_string_pretty(&document).context("Dokument nicht serialisierbar")?;
    println!("{}", json);
    Ok(())
}
