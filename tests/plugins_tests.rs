use std::cell::RefCell;
use std::rc::Rc;

use isotype_charts::ChartError;
use isotype_charts::api::ChartEngine;
use isotype_charts::api::article::{admissions_deaths_isotype, population_isotype};
use isotype_charts::extensions::{ChartPlugin, PluginContext, PluginEvent};
use isotype_charts::render::NullRenderer;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::ChartReplaced { .. } => "chart",
        PluginEvent::PointerMoved { .. } => "pointer_move",
        PluginEvent::GlyphEntered { .. } => "glyph_enter",
        PluginEvent::HoverCleared => "hover_cleared",
        PluginEvent::PointerLeft => "pointer_leave",
        PluginEvent::Rendered => "rendered",
    }
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), admissions_deaths_isotype()).expect("engine init");
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.pointer_move(10.0, 10.0);
    engine.pointer_move(39.0, 10.0);
    engine.render().expect("render");
    engine.pointer_leave();
    engine.set_chart(population_isotype()).expect("swap chart");

    let events = events.borrow();
    let kinds: Vec<&'static str> = events.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(
        kinds,
        vec![
            "pointer_move",
            "glyph_enter",
            "pointer_move",
            "rendered",
            "hover_cleared",
            "pointer_leave",
            "chart",
        ]
    );
    assert_eq!(events[1].0, PluginEvent::GlyphEntered { flat_index: 0 });
    assert_eq!(events[6].0, PluginEvent::ChartReplaced { glyph_count: 70 });
}

#[test]
fn plugin_context_reflects_state_after_the_event() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), admissions_deaths_isotype()).expect("engine init");
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.pointer_move(10.0, 12.0);

    let events = events.borrow();
    let (_, context) = events.last().expect("glyph enter event");
    assert_eq!(context.hovered, Some(0));
    assert_eq!(context.glyph_count, 274);
    assert_eq!((context.pointer_x, context.pointer_y), (10.0, 12.0));
    assert_eq!(context.canvas.width, 1066.0);
}

#[test]
fn plugin_ids_must_be_unique_and_non_empty() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), admissions_deaths_isotype()).expect("engine init");
    let events = Rc::new(RefCell::new(Vec::new()));

    engine
        .register_plugin(Box::new(RecordingPlugin::new("analytics", events.clone())))
        .expect("register plugin");
    let err = engine
        .register_plugin(Box::new(RecordingPlugin::new("analytics", events.clone())))
        .expect_err("duplicate id");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = engine
        .register_plugin(Box::new(RecordingPlugin::new("", events)))
        .expect_err("empty id");
    assert!(matches!(err, ChartError::InvalidData(_)));

    assert_eq!(engine.plugin_count(), 1);
    assert!(engine.has_plugin("analytics"));
}

#[test]
fn unregistered_plugin_stops_receiving_events() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), admissions_deaths_isotype()).expect("engine init");
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.pointer_leave();
    assert!(engine.unregister_plugin("recorder"));
    assert!(!engine.unregister_plugin("recorder"));
    engine.pointer_leave();

    assert_eq!(events.borrow().len(), 1);
    assert_eq!(engine.plugin_count(), 0);
}
