use super::*;

impl App {
    pub async fn init(&mut self) -> Result<()> {
        self.fetch_countries();
        Ok(())
    }

    /// Issues the one country directory request. The result arrives later
    /// through `process_async_events`.
    pub fn fetch_countries(&mut self) {
        self.booking.catalog.begin_loading();

        let settings = &self.config.directory;
        let directory = match CountryDirectory::build(
            &settings.base_url,
            settings.connect_timeout(),
            settings.timeout(),
        ) {
            Ok(directory) => directory,
            Err(e) => {
                let message = e.user_message().to_string();
                self.report_error("Country directory unavailable", &e);
                self.booking.catalog.finish_loading(Err(message));
                return;
            }
        };

        tracing::info!(endpoint = %directory.endpoint(), "Requesting country list");
        self.spawn_app_task(async move {
            match directory.fetch_country_names().await {
                Ok(countries) => AppAsyncEvent::CountriesLoaded {
                    countries,
                    error: None,
                },
                Err(e) => {
                    tracing::debug!("Country fetch failed: {e:?}");
                    AppAsyncEvent::CountriesLoaded {
                        countries: Vec::new(),
                        error: Some(format!("{} ({e})", e.user_message())),
                    }
                }
            }
        });
    }

    pub fn process_async_events(&mut self) {
        let mut async_events = Vec::new();
        if let Some(ref mut rx) = self.app_async_rx {
            while let Ok(event) = rx.try_recv() {
                async_events.push(event);
            }
        }

        for event in async_events {
            match event {
                AppAsyncEvent::CountriesLoaded { countries, error } => {
                    if let Some(err) = error {
                        self.report_error("Failed to load countries", &err);
                        self.booking.catalog.finish_loading(Err(err));
                    } else {
                        self.booking.catalog.finish_loading(Ok(countries));
                        self.clear_error();
                    }
                }
            }
        }
    }
}
