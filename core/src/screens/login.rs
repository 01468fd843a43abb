use crate::prelude::{Action, Effect, Notice, Screen, ScreenContext, ShellResult};
use crate::telemetry::LogManager;
use std::time::Duration;

pub const MISSING_CREDENTIALS: (&str, &str) = ("알림", "휴대폰 번호와 비밀번호를 입력해주세요.");
pub const PASSWORD_RESET: (&str, &str) = ("비밀번호 찾기", "비밀번호 재설정 링크를 발송했습니다.");
pub const SIGN_UP_PENDING: (&str, &str) = ("회원가입", "회원가입 기능은 준비 중입니다.");

/// Phone/password form. Submitting only checks that both fields are filled.
#[derive(Debug)]
pub struct LoginScreen {
    phone: String,
    password: String,
    show_password: bool,
    loading: bool,
    delay: Duration,
    logger: LogManager,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self {
            phone: String::new(),
            password: String::new(),
            show_password: false,
            loading: false,
            delay: Duration::ZERO,
            logger: LogManager::new("login"),
        }
    }
}

impl LoginScreen {
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn shows_password(&self) -> bool {
        self.show_password
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "로그인 중..."
        } else {
            "로그인"
        }
    }

    pub fn set_phone(&mut self, phone: String) {
        self.phone = phone;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn submit(&mut self) -> Vec<Effect> {
        if self.loading {
            return Vec::new();
        }
        if self.phone.is_empty() || self.password.is_empty() {
            self.logger.detail("rejected submit with empty fields");
            let (title, body) = MISSING_CREDENTIALS;
            return vec![Effect::Notice(Notice::new(title, body))];
        }
        self.loading = true;
        self.logger.record("signing in");
        vec![Effect::Schedule {
            delay: self.delay,
            action: Action::LoginCompleted,
        }]
    }

    /// Finishes a pending submit; `true` when navigation should proceed.
    pub fn complete(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }

    pub fn forgot_password(&self) -> Notice {
        let (title, body) = PASSWORD_RESET;
        Notice::new(title, body)
    }

    pub fn sign_up(&self) -> Notice {
        let (title, body) = SIGN_UP_PENDING;
        Notice::new(title, body)
    }
}

impl Screen for LoginScreen {
    fn mount(&mut self, ctx: &ScreenContext<'_>) -> ShellResult<Vec<Effect>> {
        self.delay = ctx.config.login_delay();
        Ok(Vec::new())
    }

    fn unmount(&mut self) -> Vec<Effect> {
        self.password.clear();
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_with_delay(ms: u64) -> LoginScreen {
        LoginScreen {
            delay: Duration::from_millis(ms),
            ..Default::default()
        }
    }

    #[test]
    fn empty_fields_raise_a_notice() {
        let mut login = login_with_delay(1_500);
        login.set_phone("010-1234-5678".into());
        let effects = login.submit();
        assert_eq!(
            effects,
            vec![Effect::Notice(Notice::new(MISSING_CREDENTIALS.0, MISSING_CREDENTIALS.1))]
        );
        assert!(!login.is_loading());
    }

    #[test]
    fn filled_fields_schedule_completion_once() {
        let mut login = login_with_delay(1_500);
        login.set_phone("010-1234-5678".into());
        login.set_password("pw".into());
        let effects = login.submit();
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                delay: Duration::from_millis(1_500),
                action: Action::LoginCompleted
            }]
        );
        assert_eq!(login.submit_label(), "로그인 중...");
        assert!(login.submit().is_empty());
        assert!(login.complete());
        assert!(!login.complete());
    }

    #[test]
    fn visibility_toggle_flips() {
        let mut login = LoginScreen::default();
        login.toggle_password_visibility();
        assert!(login.shows_password());
    }
}
