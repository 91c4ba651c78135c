//! 整页导航抽象
//!
//! 页面之间只通过整页跳转切换，没有客户端路由。

#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

pub trait Navigator {
    /// 跳转到给定路径（`location.assign`）
    fn assign(&self, path: &str);
    /// 重新加载当前页面（`location.reload`）
    fn reload(&self);
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Assign(String),
    Reload,
}

/// 记录导航调用，供断言使用
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockNavigator {
    events: Rc<RefCell<Vec<NavEvent>>>,
}

#[cfg(test)]
impl MockNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NavEvent> {
        self.events.borrow().clone()
    }
}

#[cfg(test)]
impl Navigator for MockNavigator {
    fn assign(&self, path: &str) {
        self.events
            .borrow_mut()
            .push(NavEvent::Assign(path.to_string()));
    }

    fn reload(&self) {
        self.events.borrow_mut().push(NavEvent::Reload);
    }
}
