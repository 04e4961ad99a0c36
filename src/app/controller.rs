//! Tool-Controller: startet Tools, leitet Events weiter und wertet
//! `ToolResponse`s aus (Commit, Revert, Verkettung).

use anyhow::bail;

use super::tools::{Tool, ToolArgs, ToolId, ToolRegistry, ToolResponse};
use super::AppState;

/// Verwaltet höchstens ein aktives Tool.
#[derive(Default)]
pub struct ToolController {
    registry: ToolRegistry,
    active: Option<Box<dyn Tool>>,
}

impl ToolController {
    /// Controller mit den Standard-Tools.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller mit eigener Registry.
    pub fn with_registry(registry: ToolRegistry) -> Self {
        Self {
            registry,
            active: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Kennung des aktiven Tools, `ToolId::None` ohne Tool.
    pub fn active_tool_id(&self) -> ToolId {
        self.active.as_ref().map_or(ToolId::None, |t| t.id())
    }

    /// Prüft, ob `id` im aktuellen Zustand starten könnte.
    pub fn can_begin(&self, state: &mut AppState, id: ToolId) -> bool {
        match self.registry.create(id) {
            Some(tool) => tool.can_begin(&state.tool_context()),
            None => false,
        }
    }

    /// Startet das Tool `id`.
    ///
    /// Liefert `End`, wenn das Tool im aktuellen Zustand nicht starten kann.
    /// Fehler nur bei unbekannter ID oder bereits laufendem Tool.
    pub fn begin_tool(
        &mut self,
        state: &mut AppState,
        id: ToolId,
        args: &ToolArgs,
    ) -> anyhow::Result<ToolResponse> {
        if let Some(active) = &self.active {
            bail!(
                "Tool {:?} kann nicht starten, {:?} läuft noch",
                id,
                active.id()
            );
        }
        let Some(mut tool) = self.registry.create(id) else {
            bail!("Unbekanntes Tool: {:?}", id);
        };

        if !tool.can_begin(&state.tool_context()) {
            log::debug!("{} kann im aktuellen Zustand nicht starten", tool.name());
            return Ok(ToolResponse::End);
        }

        log::info!("Tool gestartet: {}", tool.name());
        state.doc.begin_transaction();
        let response = tool.begin(args, &mut state.tool_context());
        self.active = Some(tool);
        self.process_response(state, response, args)
    }

    /// Leitet ein Event an das aktive Tool weiter.
    ///
    /// # Panics
    /// Ohne aktives Tool (Aufrufer muss `is_active` prüfen).
    pub fn handle_event(
        &mut self,
        state: &mut AppState,
        args: &ToolArgs,
    ) -> anyhow::Result<ToolResponse> {
        let tool = self
            .active
            .as_mut()
            .unwrap_or_else(|| panic!("handle_event ohne aktives Tool ({:?})", args.event));
        log::debug!("{:?} → {}", args.event, tool.name());
        let response = tool.update(args, &mut state.tool_context());
        self.process_response(state, response, args)
    }

    /// Bricht das aktive Tool ab und verwirft seine Änderungen.
    pub fn abort(&mut self, state: &mut AppState) {
        if let Some(tool) = self.active.take() {
            log::info!("Tool abgebrochen: {}", tool.name());
            state.doc.revert();
            state.tool_bar.clear_tip();
            state.refresh_canvas();
        }
    }

    fn process_response(
        &mut self,
        state: &mut AppState,
        response: ToolResponse,
        args: &ToolArgs,
    ) -> anyhow::Result<ToolResponse> {
        let name = self
            .active
            .as_ref()
            .map_or_else(String::new, |t| t.name().to_string());

        let result = match response {
            ToolResponse::Continue => Ok(response),
            ToolResponse::End => {
                self.active = None;
                state.doc.end();
                log::info!("Tool beendet: {}", name);
                Ok(response)
            }
            ToolResponse::Commit => {
                self.active = None;
                let recorded = state.doc.commit();
                log::info!("Tool übernommen: {} (History: {})", name, recorded);
                Ok(response)
            }
            ToolResponse::Revert => {
                self.active = None;
                state.doc.revert();
                log::info!("Tool verworfen: {}", name);
                Ok(response)
            }
            ToolResponse::Next(next) => {
                self.active = None;
                state.doc.commit();
                log::info!("Tool übernommen: {}, weiter mit {:?}", name, next);
                self.begin_tool(state, next, &ToolArgs::begin(args.coords))
                    .map(|_| response)
            }
        };

        if response.is_terminal() && !self.is_active() {
            state.tool_bar.clear_tip();
        }
        state.refresh_canvas();
        result
    }
}
