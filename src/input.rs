use winit::event::{self, DeviceEvent, ElementState, VirtualKeyCode};

/// Keys the spacecraft listens to. Shift turns an axis key into its decreasing control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    X,
    Y,
    Z,
    Space,
    Shift,
}

impl Key {
    const COUNT: usize = 7;

    pub fn from_virtual_keycode(code: VirtualKeyCode) -> Option<Self> {
        match code {
            VirtualKeyCode::Up => Some(Key::Up),
            VirtualKeyCode::Down => Some(Key::Down),
            VirtualKeyCode::X => Some(Key::X),
            VirtualKeyCode::Y => Some(Key::Y),
            VirtualKeyCode::Z => Some(Key::Z),
            VirtualKeyCode::Space => Some(Key::Space),
            VirtualKeyCode::LShift | VirtualKeyCode::RShift => Some(Key::Shift),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Forward,
    Backward,
    RollUp,
    RollDown,
    YawUp,
    YawDown,
    PitchUp,
    PitchDown,
    Capture,
}

pub struct Input {
    pub keyboard: KeyboardInput,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            keyboard: KeyboardInput::new(),
        }
    }

    pub fn update(&mut self, event: DeviceEvent) {
        if let DeviceEvent::Key(event::KeyboardInput {
            virtual_keycode: Some(code),
            state,
            ..
        }) = event
        {
            if let Some(key) = Key::from_virtual_keycode(code) {
                match state {
                    ElementState::Pressed => self.press(key),
                    ElementState::Released => self.release(key),
                }
            }
        }
    }

    pub fn press(&mut self, key: Key) {
        let key_state = self.keyboard.key_mut(key);
        // held keys repeat their press events
        if !key_state.state {
            key_state.pressed = true;
        }
        key_state.state = true;
    }

    pub fn release(&mut self, key: Key) {
        let key_state = self.keyboard.key_mut(key);
        key_state.released = true;
        key_state.state = false;
    }

    /// Controls in effect this frame. Axis keys map to their increasing control unless
    /// shift is held.
    pub fn active_controls(&self) -> Vec<Control> {
        let keyboard = &self.keyboard;
        let shift = keyboard.key(Key::Shift).state;
        let axis = |up, down| if shift { down } else { up };
        let mut controls = Vec::new();
        if keyboard.key(Key::Up).state {
            controls.push(Control::Forward);
        }
        if keyboard.key(Key::Down).state {
            controls.push(Control::Backward);
        }
        if keyboard.key(Key::X).state {
            controls.push(axis(Control::RollUp, Control::RollDown));
        }
        if keyboard.key(Key::Y).state {
            controls.push(axis(Control::YawUp, Control::YawDown));
        }
        if keyboard.key(Key::Z).state {
            controls.push(axis(Control::PitchUp, Control::PitchDown));
        }
        if keyboard.key(Key::Space).pressed {
            controls.push(Control::Capture);
        }
        controls
    }

    pub fn reset(&mut self) {
        self.keyboard.reset();
    }
}

pub struct KeyboardInput {
    keys: [KeyState; Key::COUNT],
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self {
            keys: [KeyState::new(); Key::COUNT],
        }
    }

    pub fn key(&self, key: Key) -> KeyState {
        self.keys[key as usize]
    }

    fn key_mut(&mut self, key: Key) -> &mut KeyState {
        &mut self.keys[key as usize]
    }

    pub fn reset(&mut self) {
        for key in &mut self.keys {
            key.reset();
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub state: bool,
    pub released: bool,
    pub pressed: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            state: false,
            released: false,
            pressed: false,
        }
    }

    pub fn reset(&mut self) {
        self.released = false;
        self.pressed = false;
    }
}
