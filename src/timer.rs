use crate::Result;
use crate::utils::get_window;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// A one-shot timer over `window.setTimeout`.
///
/// Holding the value keeps the callback alive. Pending timers can be
/// cancelled; page-lifetime timers should be leaked with [`Timeout::forget`].
pub struct Timeout {
    id: i32,
    closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn schedule<F>(delay_ms: i32, callback: F) -> Result<Self>
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = get_window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )?;
        Ok(Self { id, closure })
    }

    #[allow(dead_code)]
    pub fn cancel(self) -> Result<()> {
        get_window()?.clear_timeout_with_handle(self.id);
        drop(self.closure);
        Ok(())
    }

    /// Let the timer fire without keeping a handle to it. The callback is
    /// never freed, which is fine for timers scheduled once per page load.
    pub fn forget(self) {
        self.closure.forget();
    }
}
