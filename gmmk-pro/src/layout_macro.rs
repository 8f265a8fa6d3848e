/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::A)))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Hid(
            $crate::keycode::HidKeyCode::$k,
        )))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1.
#[macro_export]
macro_rules! mo {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerOn($x))
    };
}

/// Create a "set base color" key. For example, `rgb!(Rgb1)` sets the base color to white.
#[macro_export]
macro_rules! rgb {
    ($c: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Color(
            $crate::keycode::ColorKey::$c,
        )))
    };
}

/// Create an RGB matrix control key. For example, `light!(Toggle)`.
#[macro_export]
macro_rules! light {
    ($l: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Light(
            $crate::keycode::LightKey::$l,
        )))
    };
}

/// Create the bootloader key
#[macro_export]
macro_rules! boot {
    () => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Bootloader))
    };
}

/// Create an encoder action, the first argument is the clockwise action, the second is the counter-clockwise action
#[macro_export]
macro_rules! encoder {
    ($clockwise: expr, $counter_clockwise: expr) => {
        $crate::action::EncoderAction::new($clockwise, $counter_clockwise)
    };
}
