use crate::models::{Control, EntityId};

/// The page a controller renders into: the cafe id holder plus the two controls.
pub trait LikeView {
    fn entity_id(&self) -> EntityId;
    fn set_visible(&mut self, control: Control, visible: bool);
    fn set_enabled(&mut self, control: Control, enabled: bool);
}

/// The event that activated a control.
pub trait TriggerEvent {
    /// Stops the host from running the event's default action, e.g. a form submit.
    fn prevent_default(&mut self);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub default_prevented: bool,
}

impl TriggerEvent for ClickEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub visible: bool,
    pub enabled: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        ControlState {
            visible: true,
            enabled: true,
        }
    }
}

/// In-memory stand-in for a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub entity_id: EntityId,
    pub like: ControlState,
    pub unlike: ControlState,
}

impl PageControls {
    /// Both controls visible and enabled, as a page renders them before any reply.
    pub fn new(entity_id: impl Into<EntityId>) -> Self {
        PageControls {
            entity_id: entity_id.into(),
            like: ControlState::default(),
            unlike: ControlState::default(),
        }
    }

    pub fn control(&self, control: Control) -> &ControlState {
        match control {
            Control::Like => &self.like,
            Control::Unlike => &self.unlike,
        }
    }

    fn control_mut(&mut self, control: Control) -> &mut ControlState {
        match control {
            Control::Like => &mut self.like,
            Control::Unlike => &mut self.unlike,
        }
    }
}

impl LikeView for PageControls {
    fn entity_id(&self) -> EntityId {
        self.entity_id.clone()
    }

    fn set_visible(&mut self, control: Control, visible: bool) {
        self.control_mut(control).visible = visible;
    }

    fn set_enabled(&mut self, control: Control, enabled: bool) {
        self.control_mut(control).enabled = enabled;
    }
}
