mod card_vm;
mod toast_vm;

pub use card_vm::{CardVm, map_card_vm};
pub use toast_vm::{ToastVm, map_toast};
