use async_trait::async_trait;
use std::sync::Arc;

use super::super::{AuthError, CommandHandler, SessionState};

/// 登出命令
#[derive(Debug, Clone, Default)]
pub struct LogoutCommand;

/// 登出命令处理器
pub struct LogoutHandler {
    session: Arc<SessionState>,
}

impl LogoutHandler {
    pub fn new(session: Arc<SessionState>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl CommandHandler<LogoutCommand, ()> for LogoutHandler {
    async fn handle(&self, _command: LogoutCommand) -> Result<(), AuthError> {
        self.session.end().await?;
        Ok(())
    }
}
