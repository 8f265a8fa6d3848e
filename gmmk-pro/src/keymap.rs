use crate::action::{EncoderAction, KeyAction};
use crate::event::KeyboardEvent;
use crate::{a, boot, encoder, k, layer, light, mo, rgb};

pub const ROW: usize = 6;
pub const COL: usize = 15;
pub const NUM_LAYER: usize = 2;
pub const NUM_ENCODER: usize = 1;

/// Base layer
pub const BASE_LAYER: u8 = 0;
/// Function layer, held with `Fn`. Color keys and indicators only work here.
pub const FN_LAYER: u8 = 1;

//  Esc   F1  F2  F3  F4  F5  F6  F7  F8  F9  F10 F11 F12 Prt       Knob(Mute)
//  ~     1   2   3   4   5   6   7   8   9   0   -   =   BackSpc   Del
//  Tab   Q   W   E   R   T   Y   U   I   O   P   [   ]   \         PgUp
//  Caps  A   S   D   F   G   H   J   K   L   ;   '       Enter     PgDn
//  Sh_L      Z   X   C   V   B   N   M   ,   .   /   Sh_R     Up   End
//  Ct_L  Win Alt             Space           Alt Fn  Ct_R Left Down Right
//
// The Fn key is a momentary switch to layer 1, which also holds the bootloader key on `\`.
#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        layer!([
            [k!(Escape), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12), k!(PrintScreen), k!(AudioMute)],
            [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus), k!(Equal), k!(Backspace), k!(Delete)],
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(LeftBracket), k!(RightBracket), k!(Backslash), k!(PageUp)],
            [k!(CapsLock), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote), a!(No), k!(Enter), k!(PageDown)],
            [k!(LShift), a!(No), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift), k!(Up), k!(End)],
            [k!(LCtrl), k!(LGui), k!(LAlt), a!(No), a!(No), a!(No), k!(Space), a!(No), a!(No), k!(RAlt), mo!(1), k!(RCtrl), k!(Left), k!(Down), k!(Right)]
        ]),
        layer!([
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), rgb!(Rgb1), rgb!(Rgb2), rgb!(Rgb3), rgb!(Rgb4), rgb!(Rgb5), rgb!(Rgb6), rgb!(Rgb7), rgb!(Rgb8), rgb!(Rgb9), rgb!(Rgb0), a!(Transparent), a!(Transparent), a!(Transparent), light!(Toggle)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), boot!(), light!(SpeedUp)],
            [a!(Transparent), light!(ModePlain), light!(ModeBreathe), light!(ModeRainbow), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), light!(SpeedDown)],
            [a!(Transparent), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), light!(ValueUp), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(Transparent), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), light!(ModeReverse), light!(ValueDown), light!(ModeForward)]
        ]),
    ]
}

/// The knob turns the volume on every layer
pub const fn get_default_encoder_map() -> [[EncoderAction; NUM_ENCODER]; NUM_LAYER] {
    [
        [encoder!(k!(AudioVolUp), k!(AudioVolDown))],
        [encoder!(k!(AudioVolUp), k!(AudioVolDown))],
    ]
}

/// The layer stack of the keyboard, with the state of each layer.
///
/// Layers are searched from the highest active one down to the default layer; a transparent
/// entry defers to the next active layer below. The layer that resolved a press is remembered
/// per position, so the release resolves on the same layer even if the layer state changed.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize = 0> {
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Per-layer knob actions, indexed by encoder id
    encoders: Option<&'a [[EncoderAction; NUM_ENCODER]; NUM_LAYER]>,
    /// Layers switched on by a held layer key
    layer_state: [bool; NUM_LAYER],
    /// Always active, the bottom of the search
    default_layer: u8,
    /// Layer that resolved the last press at each position
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize>
    KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>
{
    pub fn new(
        action_map: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
        encoder_map: Option<&'a [[EncoderAction; NUM_ENCODER]; NUM_LAYER]>,
    ) -> Self {
        KeyMap {
            layers: action_map,
            encoders: encoder_map,
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
        }
    }

    fn is_active(&self, layer: usize) -> bool {
        self.layer_state[layer] || layer == self.default_layer as usize
    }

    /// Resolve the action of a key event.
    ///
    /// A press searches the active layers and caches the resolving layer, a release takes the
    /// cached layer and clears the cache. Positions outside of the matrix resolve to `No`.
    pub fn get_action_with_layer_cache(&mut self, key_event: KeyboardEvent) -> KeyAction {
        let (row, col) = (key_event.row as usize, key_event.col as usize);
        if row >= ROW || col >= COL {
            warn!("Key position ({}, {}) is outside of the keymap", row, col);
            return KeyAction::No;
        }

        if !key_event.pressed {
            let layer = core::mem::replace(&mut self.layer_cache[row][col], self.default_layer);
            return self.layers[layer as usize][row][col];
        }

        let default_layer = self.default_layer as usize;
        let resolved = (default_layer..NUM_LAYER)
            .rev()
            .filter(|&layer| self.is_active(layer))
            .find(|&layer| self.layers[layer][row][col] != KeyAction::Transparent);

        match resolved {
            Some(layer) => {
                self.layer_cache[row][col] = layer as u8;
                self.layers[layer][row][col]
            }
            None => KeyAction::No,
        }
    }

    /// Encoder action of the highest active layer
    pub fn get_encoder_action(&self, id: u8) -> Option<&EncoderAction> {
        let layer = self.get_activated_layer();
        self.encoders
            .and_then(|encoders| encoders.get(layer as usize))
            .and_then(|layer| layer.get(id as usize))
    }

    /// The highest active layer, the default layer if no other layer is on
    pub fn get_activated_layer(&self) -> u8 {
        (0..NUM_LAYER)
            .rev()
            .find(|&layer| self.is_active(layer))
            .map_or(self.default_layer, |layer| layer as u8)
    }

    /// Switch a layer on, layers the keymap doesn't have are ignored
    pub fn activate_layer(&mut self, layer_num: u8) {
        self.set_layer(layer_num, true);
    }

    /// Switch a layer off, layers the keymap doesn't have are ignored
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        self.set_layer(layer_num, false);
    }

    fn set_layer(&mut self, layer_num: u8, on: bool) {
        match self.layer_state.get_mut(layer_num as usize) {
            Some(state) => *state = on,
            None => warn!("Layer {} doesn't exist, the keymap has {} layers", layer_num, NUM_LAYER),
        }
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::action::Action;
    use crate::keycode::{ColorKey, HidKeyCode, KeyCode, LightKey};
    use crate::position::Key;

    fn press(key: Key) -> KeyboardEvent {
        KeyboardEvent::at(key, true)
    }

    fn release(key: Key) -> KeyboardEvent {
        KeyboardEvent::at(key, false)
    }

    #[test]
    fn test_empty_cells_have_no_action() {
        let keymap = get_default_keymap();
        for row in 0..ROW {
            for col in 0..COL {
                let is_key = Key::iter().any(|k| k.row() == row && k.col() == col);
                for layer in keymap.iter() {
                    assert_eq!(layer[row][col].is_empty(), !is_key, "cell ({}, {})", row, col);
                }
            }
        }
    }

    #[test]
    fn test_function_layer_contents() {
        let keymap = get_default_keymap();
        let fn_layer = &keymap[FN_LAYER as usize];
        for (i, key) in Key::NUMBER_ROW.iter().enumerate() {
            assert_eq!(
                fn_layer[key.row()][key.col()],
                KeyAction::Single(Action::Key(KeyCode::Color(ColorKey::from_repr(i as u8).unwrap())))
            );
        }
        let at = |key: Key| fn_layer[key.row()][key.col()];
        assert_eq!(at(Key::Backslash), boot!());
        assert_eq!(at(Key::Delete), light!(Toggle));
        assert_eq!(at(Key::Left), light!(ModeReverse));
        assert_eq!(at(Key::Right), light!(ModeForward));
        assert_eq!(at(Key::Up), light!(ValueUp));
        assert_eq!(at(Key::Down), light!(ValueDown));
        assert_eq!(
            at(Key::A),
            KeyAction::Single(Action::Key(KeyCode::Light(LightKey::ModePlain)))
        );
        assert_eq!(at(Key::Escape), KeyAction::Transparent);
        // Fn itself stays transparent so releasing it resolves to `mo!(1)`
        assert_eq!(at(Key::Fn), KeyAction::Transparent);
    }

    #[test]
    fn test_transparent_falls_through() {
        let keymap = get_default_keymap();
        let mut keymap: KeyMap<ROW, COL, NUM_LAYER> = KeyMap::new(&keymap, None);

        assert_eq!(keymap.get_activated_layer(), BASE_LAYER);
        keymap.activate_layer(FN_LAYER);
        assert_eq!(keymap.get_activated_layer(), FN_LAYER);

        assert_eq!(keymap.get_action_with_layer_cache(press(Key::Q)), k!(Q));
        assert_eq!(keymap.get_action_with_layer_cache(press(Key::Kc1)), rgb!(Rgb1));
    }

    #[test]
    fn test_release_uses_cached_layer() {
        let keymap = get_default_keymap();
        let mut keymap: KeyMap<ROW, COL, NUM_LAYER> = KeyMap::new(&keymap, None);

        keymap.activate_layer(FN_LAYER);
        assert_eq!(keymap.get_action_with_layer_cache(press(Key::Kc2)), rgb!(Rgb2));
        keymap.deactivate_layer(FN_LAYER);
        // Released after Fn, still releases the color key
        assert_eq!(keymap.get_action_with_layer_cache(release(Key::Kc2)), rgb!(Rgb2));
        // The cache is restored to the default layer
        assert_eq!(keymap.get_action_with_layer_cache(press(Key::Kc2)), k!(Kc2));
        assert_eq!(keymap.get_action_with_layer_cache(release(Key::Kc2)), k!(Kc2));
    }

    #[test]
    fn test_invalid_layer_and_position() {
        let keymap = get_default_keymap();
        let mut keymap: KeyMap<ROW, COL, NUM_LAYER> = KeyMap::new(&keymap, None);

        keymap.activate_layer(7);
        assert_eq!(keymap.get_activated_layer(), BASE_LAYER);
        assert_eq!(
            keymap.get_action_with_layer_cache(KeyboardEvent::key(6, 0, true)),
            KeyAction::No
        );
    }

    #[test]
    fn test_encoder_map() {
        let keymap = get_default_keymap();
        let encoders = get_default_encoder_map();
        let mut keymap: KeyMap<ROW, COL, NUM_LAYER, NUM_ENCODER> = KeyMap::new(&keymap, Some(&encoders));

        for layer in [BASE_LAYER, FN_LAYER] {
            keymap.activate_layer(layer);
            let action = keymap.get_encoder_action(0).copied().unwrap();
            assert_eq!(
                action.clockwise().to_action(),
                Action::Key(KeyCode::Hid(HidKeyCode::AudioVolUp))
            );
            assert_eq!(
                action.counter_clockwise().to_action(),
                Action::Key(KeyCode::Hid(HidKeyCode::AudioVolDown))
            );
        }
        assert!(keymap.get_encoder_action(1).is_none());
    }
}
