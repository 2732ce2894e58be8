use crate::key::Key;

/// Interface between an emulated machine and a frontend loop.
///
/// The frontend calls `update` once per displayed frame with a packed RGB24
/// buffer (`width * height * 3` bytes) that the app fills in.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
