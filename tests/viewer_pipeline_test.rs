//! End-to-end pipeline test: mouse events through the stroke context, the
//! frame driver, the inert engine, and the sand view - everything except the
//! real terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_sand::driver::{FrameDriver, FramePresenter, RenderPath};
use tui_sand::engine::{Engine, InertEngine, PixelView};
use tui_sand::input::{apply_mouse_event, handle_key_event, PointerMapping, ViewerAction};
use tui_sand::term::{FrameBuffer, SandView, Status, Viewport};
use tui_sand::types::{GridSize, ParticleKind, BOTTOM_MARGIN};

/// Renders frames into a framebuffer through the sand view, no terminal.
struct BufferPresenter {
    view: SandView,
    fb: FrameBuffer,
    status: Status,
    frames: u32,
}

impl BufferPresenter {
    fn new(grid: GridSize) -> Self {
        Self {
            view: SandView::new(grid, 1),
            fb: FrameBuffer::new(0, 0),
            status: Status::default(),
            frames: 0,
        }
    }
}

impl FramePresenter for BufferPresenter {
    fn present_pixels(&mut self, view: &PixelView<'_>) -> anyhow::Result<()> {
        self.view
            .render_pixels(view, &self.status, Viewport::new(80, 40), &mut self.fb);
        self.frames += 1;
        Ok(())
    }

    fn present_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.view
            .render_text(text, &self.status, Viewport::new(80, 40), &mut self.fb);
        self.frames += 1;
        Ok(())
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn click_drag_release_paints_the_grid_and_the_screen() {
    let mut engine = InertEngine::create(64, 64).unwrap();
    let mut presenter = BufferPresenter::new(engine.size());
    let mut driver = FrameDriver::attach(engine.size(), RenderPath::Pixels, &engine).unwrap();

    let mapping = PointerMapping::new(presenter.view.origin(), 1.0);

    // Press at terminal (21, 22) -> grid (20, 20); one frame of painting.
    apply_mouse_event(
        &mapping,
        &mouse(MouseEventKind::Down(MouseButton::Left), 21, 22),
        driver.context_mut(),
    );
    let (_, report) = driver.run_frame(&mut engine, &mut presenter);
    assert_eq!(report.spawns, 169);

    // The engine holds sand in the whole brush square around (20, 20).
    for y in 14..=26u32 {
        for x in 14..=26u32 {
            assert_eq!(engine.kind_at(x, y), Some(ParticleKind::Sand));
        }
    }
    // Outside the brush the interior is untouched.
    assert_eq!(engine.kind_at(30, 30), Some(ParticleKind::Empty));

    // The screen shows a sand block where the stroke landed.
    let cell = presenter.fb.get(1 + 20, 2 + 20).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, ParticleKind::Sand.rgb());

    // Release; the next frame paints nothing new.
    apply_mouse_event(
        &mapping,
        &mouse(MouseEventKind::Up(MouseButton::Left), 21, 22),
        driver.context_mut(),
    );
    let (_, report) = driver.run_frame(&mut engine, &mut presenter);
    assert_eq!(report.spawns, 0);
    assert_eq!(presenter.frames, 2);
}

#[test]
fn kind_selection_changes_what_a_stroke_spawns() {
    let mut engine = InertEngine::create(64, 64).unwrap();
    let mut presenter = BufferPresenter::new(engine.size());
    let mut driver = FrameDriver::attach(engine.size(), RenderPath::Pixels, &engine).unwrap();

    // '3' selects water, as the key map dictates.
    match handle_key_event(KeyEvent::from(KeyCode::Char('3'))) {
        Some(ViewerAction::Select(kind)) => driver.context_mut().select_kind(kind),
        other => panic!("unexpected action: {:?}", other),
    }

    driver.context_mut().press();
    driver.context_mut().pointer_moved(30, 30);
    driver.run_frame(&mut engine, &mut presenter);

    assert_eq!(engine.kind_at(30, 30), Some(ParticleKind::Water));
}

#[test]
fn strokes_never_reach_the_bottom_margin_rows() {
    let mut engine = InertEngine::create(64, 64).unwrap();
    let mut presenter = BufferPresenter::new(engine.size());
    let mut driver = FrameDriver::attach(engine.size(), RenderPath::Pixels, &engine).unwrap();

    driver.context_mut().press();
    driver.context_mut().pointer_moved(32, 63);
    driver.run_frame(&mut engine, &mut presenter);

    let limit = 64 - BOTTOM_MARGIN;
    for y in limit..64u32 {
        // Interior bottom rows stay as constructed (empty, walls at the edge).
        assert_ne!(engine.kind_at(32, y), Some(ParticleKind::Sand));
    }
    // The rows just above the margin did get painted.
    assert_eq!(engine.kind_at(32, limit - 1), Some(ParticleKind::Sand));
}

#[test]
fn eraser_kind_clears_painted_cells() {
    let mut engine = InertEngine::create(64, 64).unwrap();
    let mut presenter = BufferPresenter::new(engine.size());
    let mut driver = FrameDriver::attach(engine.size(), RenderPath::Pixels, &engine).unwrap();

    driver.context_mut().press();
    driver.context_mut().pointer_moved(20, 20);
    driver.run_frame(&mut engine, &mut presenter);
    assert_eq!(engine.kind_at(20, 20), Some(ParticleKind::Sand));

    driver.context_mut().select_kind(ParticleKind::Empty);
    driver.run_frame(&mut engine, &mut presenter);
    assert_eq!(engine.kind_at(20, 20), Some(ParticleKind::Empty));
}

#[test]
fn text_path_round_trips_through_the_view() {
    let mut engine = InertEngine::create(16, 12).unwrap();
    let mut presenter = BufferPresenter::new(engine.size());
    let mut driver = FrameDriver::attach(engine.size(), RenderPath::Text, &engine).unwrap();

    engine.spawn_at(5, 5, ParticleKind::Plant).unwrap();
    driver.run_frame(&mut engine, &mut presenter);

    // The engine's plant glyph lands at origin + (5, 5).
    let cell = presenter.fb.get(1 + 5, 2 + 5).unwrap();
    assert_eq!(cell.ch, ParticleKind::Plant.glyph());
}

#[test]
fn trigger_key_drops_one_particle_at_the_pointer() {
    let mut engine = InertEngine::create(64, 64).unwrap();
    let mut presenter = BufferPresenter::new(engine.size());
    let mut driver = FrameDriver::attach(engine.size(), RenderPath::Pixels, &engine).unwrap();

    let mapping = PointerMapping::new((1, 2), 1.0);
    apply_mouse_event(&mapping, &mouse(MouseEventKind::Moved, 41, 12), driver.context_mut());

    match handle_key_event(KeyEvent::from(KeyCode::Char(' '))) {
        Some(ViewerAction::SpawnOnce) => driver.context_mut().request_single_spawn(),
        other => panic!("unexpected action: {:?}", other),
    }

    let (_, report) = driver.run_frame(&mut engine, &mut presenter);
    assert_eq!(report.spawns, 1);
    assert_eq!(engine.kind_at(40, 10), Some(ParticleKind::Sand));
    // A single drop, not a brush stroke.
    assert_eq!(engine.kind_at(41, 10), Some(ParticleKind::Empty));
}
