//! 页面生命周期
//!
//! `Init -> Loading -> {Rendered | Redirected | ErrorDisplayed}`，终态在页面生命周期内不再变化。

#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Init,
    Loading,
    Rendered(T),
    /// 已发起整页跳转，携带目标路径
    Redirected(String),
    ErrorDisplayed(String),
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Init
    }
}

impl<T> PageState<T> {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PageState::Rendered(_) | PageState::Redirected(_) | PageState::ErrorDisplayed(_)
        )
    }

    /// `Init -> Loading`，其它状态下不做任何事并返回 `false`
    pub fn start(&mut self) -> bool {
        if matches!(self, PageState::Init) {
            *self = PageState::Loading;
            true
        } else {
            false
        }
    }

    /// `Loading -> 终态`
    ///
    /// 只接受终态，且只能从 `Loading` 进入；不存在回到 `Loading` 的转换。
    pub fn settle(&mut self, next: PageState<T>) -> bool {
        if matches!(self, PageState::Loading) && next.is_terminal() {
            *self = next;
            true
        } else {
            false
        }
    }

    pub fn rendered(&self) -> Option<&T> {
        match self {
            PageState::Rendered(view) => Some(view),
            _ => None,
        }
    }

    pub fn rendered_mut(&mut self) -> Option<&mut T> {
        match self {
            PageState::Rendered(view) => Some(view),
            _ => None,
        }
    }
}
