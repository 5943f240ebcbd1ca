use web_sys::MouseEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
	Primary,
	Secondary,
	Other,
}

impl PointerButton {
	/// Maps `MouseEvent.button` codes.
	pub fn from_dom(button: i16) -> Self {
		match button {
			0 => PointerButton::Primary,
			2 => PointerButton::Secondary,
			_ => PointerButton::Other,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
	pub alt: bool,
	pub ctrl: bool,
	pub shift: bool,
	pub meta: bool,
}

impl Modifiers {
	pub const NONE: Modifiers = Modifiers {
		alt: false,
		ctrl: false,
		shift: false,
		meta: false,
	};

	pub fn from_mouse_event(ev: &MouseEvent) -> Self {
		Self {
			alt: ev.alt_key(),
			ctrl: ev.ctrl_key(),
			shift: ev.shift_key(),
			meta: ev.meta_key(),
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modifier {
	#[default]
	Alt,
	Ctrl,
	Shift,
	Meta,
}

impl Modifier {
	pub fn is_held(self, mods: &Modifiers) -> bool {
		match self {
			Modifier::Alt => mods.alt,
			Modifier::Ctrl => mods.ctrl,
			Modifier::Shift => mods.shift,
			Modifier::Meta => mods.meta,
		}
	}
}
