//! Host that records every call instead of rendering
//!
//! Used by tests to assert controller side effects without a physics
//! runtime. Handles are allocated sequentially from 1 and never reused.

use std::collections::BTreeMap;

use glam::Vec2;

use super::{SceneHost, ShapeSpec, TextHandle, TextStyle};
use crate::sim::EntityHandle;

/// One call made on the host, in order
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SetWorldBounds(f32, f32),
    CreateShape(EntityHandle, ShapeSpec),
    SetVelocity(EntityHandle, Vec2),
    Destroy(EntityHandle),
    Flash(EntityHandle, u32),
    CreateText(TextHandle, String),
    SetText(TextHandle, String),
    SetTextVisible(TextHandle, bool),
    Pause,
    Resume,
    LaunchOverlay(String),
    ShowRestartButton(String, TextStyle),
    Restart,
}

#[derive(Debug, Clone)]
struct RecordedText {
    content: String,
    visible: bool,
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Full call log
    pub calls: Vec<HostCall>,
    pub paused: bool,
    /// Overlays launched since creation
    pub overlays: Vec<String>,
    shapes: BTreeMap<EntityHandle, ShapeSpec>,
    texts: BTreeMap<TextHandle, RecordedText>,
    restart_button: Option<(String, TextStyle)>,
    next_entity: u32,
    next_text: u32,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes created and not yet destroyed
    pub fn live_shapes(&self) -> usize {
        self.shapes.len()
    }

    pub fn shape(&self, entity: EntityHandle) -> Option<&ShapeSpec> {
        self.shapes.get(&entity)
    }

    pub fn text_content(&self, text: TextHandle) -> Option<String> {
        self.texts.get(&text).map(|t| t.content.clone())
    }

    pub fn text_visible(&self, text: TextHandle) -> Option<bool> {
        self.texts.get(&text).map(|t| t.visible)
    }

    /// Any live text with exactly this content
    pub fn has_text(&self, content: &str) -> bool {
        self.texts.values().any(|t| t.content == content)
    }

    pub fn restart_shown(&self) -> bool {
        self.restart_button.is_some()
    }

    /// Style of the restart button, if shown
    pub fn restart_style(&self) -> Option<&TextStyle> {
        self.restart_button.as_ref().map(|(_, style)| style)
    }
}

impl SceneHost for RecordingHost {
    fn set_world_bounds(&mut self, width: f32, height: f32) {
        self.calls.push(HostCall::SetWorldBounds(width, height));
    }

    fn create_shape(&mut self, spec: &ShapeSpec) -> EntityHandle {
        self.next_entity += 1;
        let entity = EntityHandle(self.next_entity);
        self.shapes.insert(entity, *spec);
        self.calls.push(HostCall::CreateShape(entity, *spec));
        entity
    }

    fn set_velocity(&mut self, entity: EntityHandle, velocity: Vec2) {
        if let Some(shape) = self.shapes.get_mut(&entity) {
            shape.velocity = velocity;
        }
        self.calls.push(HostCall::SetVelocity(entity, velocity));
    }

    fn destroy(&mut self, entity: EntityHandle) {
        self.shapes.remove(&entity);
        self.calls.push(HostCall::Destroy(entity));
    }

    fn flash(&mut self, entity: EntityHandle, duration_ms: u32) {
        self.calls.push(HostCall::Flash(entity, duration_ms));
    }

    fn create_text(&mut self, _position: Vec2, content: &str, _style: &TextStyle) -> TextHandle {
        self.next_text += 1;
        let text = TextHandle(self.next_text);
        self.texts.insert(
            text,
            RecordedText {
                content: content.to_string(),
                visible: true,
            },
        );
        self.calls.push(HostCall::CreateText(text, content.to_string()));
        text
    }

    fn set_text(&mut self, text: TextHandle, content: &str) {
        if let Some(t) = self.texts.get_mut(&text) {
            t.content = content.to_string();
        }
        self.calls.push(HostCall::SetText(text, content.to_string()));
    }

    fn set_text_visible(&mut self, text: TextHandle, visible: bool) {
        if let Some(t) = self.texts.get_mut(&text) {
            t.visible = visible;
        }
        self.calls.push(HostCall::SetTextVisible(text, visible));
    }

    fn pause(&mut self) {
        self.paused = true;
        self.calls.push(HostCall::Pause);
    }

    fn resume(&mut self) {
        self.paused = false;
        self.calls.push(HostCall::Resume);
    }

    fn launch_overlay(&mut self, name: &str) {
        self.overlays.push(name.to_string());
        self.calls.push(HostCall::LaunchOverlay(name.to_string()));
    }

    fn show_restart_button(&mut self, _position: Vec2, label: &str, style: &TextStyle) {
        self.restart_button = Some((label.to_string(), *style));
        self.calls.push(HostCall::ShowRestartButton(label.to_string(), *style));
    }

    fn restart(&mut self) {
        self.shapes.clear();
        self.texts.clear();
        self.restart_button = None;
        self.paused = false;
        self.calls.push(HostCall::Restart);
    }
}
