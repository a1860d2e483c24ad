//! DOM class helpers.

/// Minimal class-list access, implemented for `web_sys::Element` in the browser.
pub trait ClassList {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

#[cfg(feature = "hydrate")]
impl ClassList for web_sys::Element {
    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }
}

/// Add `add` then remove `remove` on the same element.
///
/// When both names are equal the class ends up removed.
pub fn swap_class<E>(element: &E, add: &str, remove: &str)
where
    E: ClassList + ?Sized,
{
    element.add_class(add);
    element.remove_class(remove);
}

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;
