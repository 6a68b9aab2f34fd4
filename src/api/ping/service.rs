// Ping service: the constant provider behind GET /ping

const PONG: &str = "pong";

/// Stateless service injected into the ping controller through `AppState`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PingService;

impl PingService {
    pub fn new() -> Self {
        Self
    }

    /// Always returns `"pong"`.
    pub fn get_pong(&self) -> &'static str {
        PONG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_pong_on_every_call() {
        let service = PingService::new();

        for _ in 0..3 {
            assert_eq!(service.get_pong(), "pong");
        }
    }
}
