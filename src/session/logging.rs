use crate::event::Event;

pub(super) fn log_event(tick: u64, ev: &Event) {
    use Event as E;
    match ev {
        E::Tick => {
            log::trace!(target: "events", "[tick {}] Tick", tick);
        }
        E::ToolSelected { tool } => {
            log::info!(target: "events", "[tick {}] ToolSelected {:?}", tick, tool);
        }
        E::CameraFloorChanged { floor } => {
            log::info!(target: "events", "[tick {}] CameraFloorChanged floor={}", tick, floor);
        }
        E::PointerMoved { point, floor } => {
            log::trace!(target: "events", "[tick {}] PointerMoved ({:.2}, {:.2}) floor={}",
                tick, point.x, point.z, floor);
        }
        E::PointerLeft => {
            log::trace!(target: "events", "[tick {}] PointerLeft", tick);
        }
        E::PrimaryPressed => {
            log::debug!(target: "events", "[tick {}] PrimaryPressed", tick);
        }
        E::SecondaryPressed => {
            log::debug!(target: "events", "[tick {}] SecondaryPressed", tick);
        }
        E::ButtonsReleased => {
            log::debug!(target: "events", "[tick {}] ButtonsReleased", tick);
        }
        E::UndoRequested => {
            log::info!(target: "events", "[tick {}] UndoRequested", tick);
        }
        E::RedoRequested => {
            log::info!(target: "events", "[tick {}] RedoRequested", tick);
        }
        E::MapCleared => {
            log::info!(target: "events", "[tick {}] MapCleared", tick);
        }
        E::MapResized { left, right, bottom, top } => {
            log::info!(target: "events", "[tick {}] MapResized left={} right={} bottom={} top={}",
                tick, left, right, bottom, top);
        }
    }
}
