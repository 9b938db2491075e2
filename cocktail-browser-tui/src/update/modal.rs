use crate::message::ModalMessage;
use crate::model::App;

/// Handle modal messages. Every modal is a notice, so both keys dismiss it.
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => app.modal.close(),
    }
}
