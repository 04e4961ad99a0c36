use eda_editor_core::app::{Key, MouseButton};
use eda_editor_core::core::{
    Component, Coordi, Document, Entity, Gate, GatePath, MemoryLibrary, ObjectType, Polygon,
    SelectableRef, Sheet, Symbol, Unit,
};
use eda_editor_core::{AppState, EditorOptions, ScriptedDialogs, ToolArgs, ToolController, ToolId, ToolResponse};

fn square() -> Polygon {
    Polygon::from_positions(
        1,
        0,
        &[
            Coordi::new(0, 0),
            Coordi::new(100, 0),
            Coordi::new(100, 100),
            Coordi::new(0, 100),
        ],
    )
}

/// U1 (Gate A) und optional U2 (Gate A), ein Symbol pro Unit.
fn schematic(two_components: bool) -> (Document, MemoryLibrary) {
    let mut doc = Document::new();
    doc.add_entity(Entity::new(10, "7400").with_gate(Gate {
        id: 11,
        name: "A".into(),
        suffix: "A".into(),
        unit: 100,
    }));
    doc.add_component(Component {
        id: 20,
        refdes: "U1".into(),
        entity: 10,
    });
    if two_components {
        doc.add_component(Component {
            id: 21,
            refdes: "U2".into(),
            entity: 10,
        });
    }
    doc.add_sheet(Sheet::new(30, "Main"));

    let mut lib = MemoryLibrary::new();
    lib.add_unit(Unit {
        id: 100,
        name: "NAND".into(),
    });
    lib.add_symbol(Symbol {
        id: 500,
        unit: 100,
        name: "NAND".into(),
        bbox: (Coordi::new(-10, -10), Coordi::new(10, 10)),
    });
    (doc, lib)
}

fn state(doc: Document, lib: MemoryLibrary, dialogs: ScriptedDialogs) -> AppState {
    AppState::new(doc, Box::new(lib), Box::new(dialogs), EditorOptions::default())
}

#[test]
fn test_fillet_commit_then_undo_and_redo() {
    let mut state = state(
        {
            let mut doc = Document::new();
            doc.add_polygon(square());
            doc
        },
        MemoryLibrary::new(),
        ScriptedDialogs::new().with_datum(Some(20.0)),
    );
    state
        .doc
        .selection_mut()
        .replace_with(SelectableRef::with_vertex(1, ObjectType::PolygonVertex, 0));
    let original = state.doc.document().clone();

    let mut controller = ToolController::new();
    let resp = controller
        .begin_tool(&mut state, ToolId::RoundOffVertex, &ToolArgs::begin(Coordi::ZERO))
        .expect("begin_tool fehlgeschlagen");
    assert_eq!(resp, ToolResponse::Continue);

    let resp = controller
        .handle_event(&mut state, &ToolArgs::key(Key::Return, Coordi::ZERO))
        .expect("handle_event fehlgeschlagen");
    assert_eq!(resp, ToolResponse::Commit);

    let poly = state.doc.document().polygon(1).expect("Polygon fehlt").clone();
    assert_eq!(poly.len(), 5);
    assert_eq!(poly.vertices[0].position, Coordi::new(0, 20));
    assert_eq!(poly.vertices[1].position, Coordi::new(20, 0));
    assert!(!poly.temporary);

    assert!(state.doc.undo());
    assert_eq!(state.doc.document(), &original);
    assert_eq!(state.doc.selection().len(), 1, "Undo stellt die Selektion wieder her");

    assert!(state.doc.redo());
    assert_eq!(state.doc.document().polygon(1), Some(&poly));
}

#[test]
fn test_map_symbol_chains_into_move() {
    let (doc, lib) = schematic(false);
    let mut state = state(doc, lib, ScriptedDialogs::new());
    let mut controller = ToolController::new();

    let resp = controller
        .begin_tool(&mut state, ToolId::MapSymbol, &ToolArgs::begin(Coordi::new(10, 10)))
        .expect("begin_tool fehlgeschlagen");
    assert_eq!(resp, ToolResponse::Next(ToolId::Move));
    assert_eq!(controller.active_tool_id(), ToolId::Move);

    let placed = state
        .doc
        .selection()
        .single_of(ObjectType::SchematicSymbol)
        .expect("Neues Symbol muss selektiert sein");
    assert!(state.doc.document().is_gate_placed(GatePath::new(20, 11)));
    assert!(state.canvas.selectables().index_of(&placed).is_some());

    controller
        .handle_event(&mut state, &ToolArgs::moved(Coordi::new(30, 40)))
        .expect("handle_event fehlgeschlagen");
    let resp = controller
        .handle_event(&mut state, &ToolArgs::click(MouseButton::Left, Coordi::new(30, 40)))
        .expect("handle_event fehlgeschlagen");
    assert_eq!(resp, ToolResponse::Commit);
    assert!(!controller.is_active());
    assert_eq!(
        state.doc.document().schematic_symbol(placed.id).map(|s| s.shift),
        Some(Coordi::new(30, 40))
    );

    // Zwei History-Einträge: Platzieren und Verschieben
    assert!(state.doc.undo());
    assert_eq!(
        state.doc.document().schematic_symbol(placed.id).map(|s| s.shift),
        Some(Coordi::new(10, 10))
    );
    assert!(state.doc.undo());
    assert!(state.doc.document().schematic_symbol(placed.id).is_none());
    assert!(!state.doc.can_undo());
}

#[test]
fn test_cancelled_map_symbol_changes_nothing() {
    let (doc, lib) = schematic(true);
    let mut state = state(doc, lib, ScriptedDialogs::new().with_map_symbol(None));
    let before = state.doc.document().clone();
    let mut controller = ToolController::new();

    let resp = controller
        .begin_tool(&mut state, ToolId::MapSymbol, &ToolArgs::begin(Coordi::ZERO))
        .expect("begin_tool fehlgeschlagen");
    assert_eq!(resp, ToolResponse::End);
    assert!(!controller.is_active());
    assert_eq!(state.doc.document(), &before);
    assert!(state.doc.selection().is_empty());
    assert!(!state.doc.can_undo());
}

#[test]
fn test_move_revert_restores_vertex() {
    let mut doc = Document::new();
    doc.add_polygon(square());
    let mut state = state(doc, MemoryLibrary::new(), ScriptedDialogs::new());
    let before = state.doc.document().clone();
    state
        .doc
        .selection_mut()
        .replace_with(SelectableRef::with_vertex(1, ObjectType::PolygonVertex, 2));

    let mut controller = ToolController::new();
    controller
        .begin_tool(&mut state, ToolId::Move, &ToolArgs::begin(Coordi::new(100, 100)))
        .expect("begin_tool fehlgeschlagen");
    controller
        .handle_event(&mut state, &ToolArgs::moved(Coordi::new(150, 120)))
        .expect("handle_event fehlgeschlagen");
    assert_eq!(
        state.doc.document().polygon(1).map(|p| p.vertices[2].position),
        Some(Coordi::new(150, 120))
    );

    let resp = controller
        .handle_event(&mut state, &ToolArgs::click(MouseButton::Right, Coordi::ZERO))
        .expect("handle_event fehlgeschlagen");
    assert_eq!(resp, ToolResponse::Revert);
    assert_eq!(state.doc.document(), &before);
    assert!(!state.doc.can_undo());
}

#[test]
fn test_rejected_fillet_keeps_selection_and_flashes() {
    let mut doc = Document::new();
    let mut poly = square();
    poly.vertices[0] =
        eda_editor_core::core::Vertex::arc(Coordi::ZERO, Coordi::new(10, 10), false);
    doc.add_polygon(poly);
    let mut state = state(doc, MemoryLibrary::new(), ScriptedDialogs::new());
    state
        .doc
        .selection_mut()
        .replace_with(SelectableRef::with_vertex(1, ObjectType::PolygonVertex, 0));

    let mut controller = ToolController::new();
    let resp = controller
        .begin_tool(&mut state, ToolId::RoundOffVertex, &ToolArgs::begin(Coordi::ZERO))
        .expect("begin_tool fehlgeschlagen");
    assert_eq!(resp, ToolResponse::End);
    assert_eq!(state.tool_bar.last_flash(), Some("can't round off arc"));
    assert_eq!(state.doc.selection().len(), 1);
    assert!(!state.doc.in_transaction());
}

#[test]
fn test_cancelled_fillet_restores_selection() {
    let mut doc = Document::new();
    doc.add_polygon(square());
    let mut state = state(doc, MemoryLibrary::new(), ScriptedDialogs::new());
    let vertex = SelectableRef::with_vertex(1, ObjectType::PolygonVertex, 0);
    state.doc.selection_mut().replace_with(vertex);
    let selection_before = state.doc.selection().clone();
    let document_before = state.doc.document().clone();

    let mut controller = ToolController::new();
    controller
        .begin_tool(&mut state, ToolId::RoundOffVertex, &ToolArgs::begin(Coordi::ZERO))
        .expect("begin_tool fehlgeschlagen");
    assert!(state.doc.selection().is_empty());
    controller
        .handle_event(&mut state, &ToolArgs::moved(Coordi::new(25, 25)))
        .expect("handle_event fehlgeschlagen");
    let resp = controller
        .handle_event(&mut state, &ToolArgs::key(Key::Escape, Coordi::ZERO))
        .expect("handle_event fehlgeschlagen");

    assert_eq!(resp, ToolResponse::Revert);
    assert_eq!(state.doc.selection(), &selection_before);
    assert_eq!(state.doc.document(), &document_before);
    // Preview im Canvas folgt der wiederhergestellten Selektion
    let idx = state
        .canvas
        .selectables()
        .index_of(&vertex)
        .expect("Vertex fehlt im Canvas");
    assert!(state.canvas.selectables().items()[idx].get_flag(eda_editor_core::SelectableFlag::Preview));
}
