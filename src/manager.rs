//! Engine routing and capture control.
//!
//! [`InputManager`] owns both factories for one adapter. It checks the
//! `engine` tag of a description before handing it to a factory, and runs one
//! capture at a time on behalf of a configuration UI.

use crate::adapter::SharedSource;
use crate::analog::PadAnalogFactory;
use crate::button::PadButtonFactory;
use crate::capture::ENGINE;
use crate::device::{AnalogDevice, ButtonDevice, InputFactory};
use crate::error::{BindingError, BindingResult};
use crate::params::ParamPackage;
use crate::profile::{BindingProfile, BoundProfile};

/// What a capture session is listening for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureKind {
    Button,
    Analog,
}

pub struct InputManager {
    buttons: PadButtonFactory,
    analogs: PadAnalogFactory,
    capturing: Option<CaptureKind>,
}

impl InputManager {
    pub fn new(source: SharedSource) -> Self {
        Self {
            buttons: PadButtonFactory::new(source.clone()),
            analogs: PadAnalogFactory::new(source),
            capturing: None,
        }
    }

    fn check_engine(params: &ParamPackage) -> BindingResult<()> {
        match params.get("engine") {
            None => Err(BindingError::MissingEngine),
            Some(ENGINE) => Ok(()),
            Some(other) => Err(BindingError::UnknownEngine(other.to_string())),
        }
    }

    pub fn create_button(&self, params: &ParamPackage) -> BindingResult<Box<dyn ButtonDevice>> {
        Self::check_engine(params)?;
        Ok(self.buttons.create(params))
    }

    pub fn create_analog(&self, params: &ParamPackage) -> BindingResult<Box<dyn AnalogDevice>> {
        Self::check_engine(params)?;
        Ok(self.analogs.create(params))
    }

    /// Builds every device named by `profile`.
    pub fn bind_profile(&self, profile: &BindingProfile) -> BindingResult<BoundProfile> {
        let mut bound = BoundProfile::default();
        for (action, params) in &profile.buttons {
            bound
                .buttons
                .insert(action.clone(), self.create_button(params)?);
        }
        for (action, params) in &profile.analogs {
            bound
                .analogs
                .insert(action.clone(), self.create_analog(params)?);
        }
        Ok(bound)
    }

    /// Starts capturing `kind`, ending any capture already running.
    pub fn begin_configuration(&mut self, kind: CaptureKind) {
        self.end_configuration();
        match kind {
            CaptureKind::Button => self.buttons.begin_configuration(),
            CaptureKind::Analog => self.analogs.begin_configuration(),
        }
        self.capturing = Some(kind);
    }

    pub fn end_configuration(&mut self) {
        match self.capturing.take() {
            Some(CaptureKind::Button) => self.buttons.end_configuration(),
            Some(CaptureKind::Analog) => self.analogs.end_configuration(),
            None => {}
        }
    }

    pub fn capturing(&self) -> Option<CaptureKind> {
        self.capturing
    }

    /// Polls the active capture. `None` while idle or while nothing was detected.
    pub fn next_binding(&mut self) -> Option<ParamPackage> {
        match self.capturing? {
            CaptureKind::Button => self.buttons.next_input(),
            CaptureKind::Analog => self.analogs.next_input(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::VirtualAdapter;
    use crate::event::PadSample;
    use crate::pad::{PadAxis, PadButton};
    use std::sync::Arc;

    fn setup() -> (Arc<VirtualAdapter>, InputManager) {
        let adapter = Arc::new(VirtualAdapter::new());
        let manager = InputManager::new(adapter.clone());
        (adapter, manager)
    }

    #[test]
    fn engine_tag_is_required() {
        let (_, manager) = setup();
        let params = ParamPackage::new().with("button", 256);
        assert!(matches!(
            manager.create_button(&params),
            Err(BindingError::MissingEngine)
        ));

        let params = params.with("engine", "sdl");
        assert!(matches!(
            manager.create_analog(&params),
            Err(BindingError::UnknownEngine(e)) if e == "sdl"
        ));

        let params = params.with("engine", ENGINE);
        assert!(manager.create_button(&params).is_ok());
    }

    #[test]
    fn capture_routes_to_active_kind() {
        let (adapter, mut manager) = setup();
        assert_eq!(manager.next_binding(), None);

        manager.begin_configuration(CaptureKind::Analog);
        adapter.push_sample(0, PadSample::buttons(&[PadButton::A]));
        adapter.push_sample(0, PadSample::axis(PadAxis::SubstickX, 0));
        adapter.push_sample(0, PadSample::axis(PadAxis::SubstickY, 255));
        let params = manager.next_binding().unwrap();
        assert!(params.has("axis_x"));

        manager.begin_configuration(CaptureKind::Button);
        assert_eq!(manager.capturing(), Some(CaptureKind::Button));
        adapter.push_sample(3, PadSample::buttons(&[PadButton::Y]));
        let params = manager.next_binding().unwrap();
        assert_eq!(params.get_int("button", 0), i64::from(PadButton::Y.bits()));

        manager.end_configuration();
        manager.end_configuration();
        assert_eq!(manager.capturing(), None);
        assert!(!adapter.is_configuring());
    }
}
