//! 语言偏好持久化
//!
//! 引擎只需要一个固定键下的字符串存取：启动时读一次，
//! 每次成功切换语言后写一次。

use std::fs;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// 语言偏好存储接口
pub trait PreferenceStore {
    /// 读取持久化的语言代码，从未保存过则为 `None`
    fn load(&self) -> Option<String>;

    /// 保存语言代码
    fn save(&mut self, code: &str) -> EngineResult<()>;
}

/// 内存存储，用于测试和无持久化需求的宿主
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
}

impl MemoryPreferenceStore {
    /// 以预置值创建（模拟上次会话留下的偏好）
    pub fn with_value(code: &str) -> Self {
        Self {
            value: Some(code.to_string()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, code: &str) -> EngineResult<()> {
        self.value = Some(code.to_string());
        Ok(())
    }
}

/// 单文件存储：整个文件就是语言代码字符串
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// 指向给定偏好文件
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let code = contents.trim();
        if code.is_empty() {
            None
        } else {
            Some(code.to_string())
        }
    }

    fn save(&mut self, code: &str) -> EngineResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| EngineError::Storage(format!("创建目录失败: {e}")))?;
        }
        fs::write(&self.path, code).map_err(|e| EngineError::Storage(format!("写入失败: {e}")))
    }
}
