use dioxus::prelude::*;

/// Transient notifications: success and error variants, dismissed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// The toast stack provided at the app root. Every screen reports through
/// this; no failure is fatal to the shell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

/// Visible toasts are capped; older ones fall off first.
const MAX_VISIBLE: usize = 4;

impl ToastStack {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
    }
}

pub fn use_toasts() -> Signal<ToastStack> {
    use_context::<Signal<ToastStack>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests pushing and dismissing notifications.
    ///
    /// Expected: ids are unique, dismiss removes only the target.
    #[test]
    fn pushes_and_dismisses() {
        let mut stack = ToastStack::default();
        stack.success("Paciente registrado correctamente");
        stack.error("Error al cargar pacientes");
        assert_eq!(stack.toasts.len(), 2);

        let first = stack.toasts[0].id;
        stack.dismiss(first);
        assert_eq!(stack.toasts.len(), 1);
        assert_eq!(stack.toasts[0].kind, ToastKind::Error);
    }

    /// Tests the visible-toast cap.
    ///
    /// Expected: the oldest entries fall off beyond the cap.
    #[test]
    fn caps_visible_toasts() {
        let mut stack = ToastStack::default();
        for i in 0..6 {
            stack.success(format!("mensaje {i}"));
        }
        assert_eq!(stack.toasts.len(), MAX_VISIBLE);
        assert_eq!(stack.toasts[0].message, "mensaje 2");
    }
}
