use super::entities::{Identity, Role};

/// 演示身份的统一密码
pub const DEMO_PASSWORD: &str = "123";

/// 身份表不存在时写入的演示身份
pub fn demo_identities() -> Vec<Identity> {
    vec![
        Identity::new("1", "Dr. Exemplo", "pro@exemplo.com", Role::Professional)
            .with_password(DEMO_PASSWORD)
            .with_profession("Médico")
            .with_phone("11999999999"),
        Identity::new("2", "Visitante", "user@exemplo.com", Role::Client)
            .with_password(DEMO_PASSWORD)
            .with_phone("11988888888"),
    ]
}
