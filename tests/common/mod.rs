//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use cloud_dns_client::{DnsClient, StaticTokenRequester};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试 zone 名称
pub fn generate_test_zone_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("test-zone-{}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装客户端和项目信息
pub struct TestContext {
    pub client: DnsClient,
    pub project_id: String,
}

impl TestContext {
    /// 从环境变量创建测试上下文
    ///
    /// 需要 `DNS_TEST_PROJECT` 和 `DNS_TEST_TOKEN`；
    /// `DNS_TEST_API_BASE` 可选（指向私有部署或模拟器）。
    pub fn from_env() -> Option<Self> {
        let project_id = env::var("DNS_TEST_PROJECT").ok()?;
        let token = env::var("DNS_TEST_TOKEN").ok()?;

        let requester = Arc::new(StaticTokenRequester::new(token).ok()?);
        let client = match env::var("DNS_TEST_API_BASE") {
            Ok(api_base) => {
                DnsClient::with_api_base(project_id.clone(), requester, api_base).ok()?
            }
            Err(_) => DnsClient::new(project_id.clone(), requester).ok()?,
        };

        Some(Self { client, project_id })
    }
}
