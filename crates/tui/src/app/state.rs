use super::*;

pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub booking: BookingForm,
    pub layout: LayoutState,
    pub focus: FocusState,
    pub keybinds: Keybinds,
    pub picker: Option<Picker>,
    pub show_help: bool,
    pub show_submitted: bool,
    pub app_async_tx: Option<mpsc::UnboundedSender<AppAsyncEvent>>,
    pub app_async_rx: Option<mpsc::UnboundedReceiver<AppAsyncEvent>>,
    pub last_error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        let (app_async_tx, app_async_rx) = mpsc::unbounded_channel();
        let booking = BookingForm::new(config.booking.suggested_count);

        Self {
            should_quit: false,
            focus: FocusState::new(booking.step),
            config,
            booking,
            layout: LayoutState::default(),
            keybinds: Keybinds,
            picker: None,
            show_help: false,
            show_submitted: false,
            app_async_tx: Some(app_async_tx),
            app_async_rx: Some(app_async_rx),
            last_error: None,
        }
    }
}
