use crate::placement::MediaType;

/// Anything that tints itself to the scene's ambient darkness.
pub trait DarknessAware {
    fn update_darkness(&mut self, level: f64);
}

/// Fullscreen overlay. At most one media is shown at a time; a new share
/// replaces it and a dismiss clears it.
pub trait FullscreenLayer: DarknessAware {
    fn handle_share(&mut self, url: &str, media_type: MediaType, loop_: bool);
    fn handle_dismiss(&mut self);
}

/// Popout windows showing shared media.
pub trait MediaPopout: DarknessAware {
    fn handle_share(&mut self, url: &str, loop_: bool);
}
