// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate severity styling and design tokens.

#[cfg(test)]
mod tests {
    use iced_toast::ui::design_tokens::{palette, sizing, spacing};
    use iced_toast::ui::notifications::{Notification, Severity, Toast};

    #[test]
    fn severity_lookup_matches_palette() {
        assert_eq!(Severity::from_name("error").color(), palette::ERROR_500);
        assert_eq!(Severity::from_name("warning").color(), palette::WARNING_500);
        assert_eq!(Severity::from_name("success").color(), palette::SUCCESS_500);
        assert_eq!(Severity::from_name("info").color(), palette::INFO_500);
        assert_eq!(Severity::default().color(), palette::INFO_500);
        assert_eq!(Severity::from_name("unheard-of").color(), palette::INFO_500);
    }

    #[test]
    fn views_build_for_every_phase() {
        let (mut toast, _countdown) = Toast::show(Notification::warning("Low battery"));
        let _ = toast.view();
        let _ = toast.view_card();

        toast.close();
        let _ = toast.view();
        let _ = toast.view_card();
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = spacing::MD;
        assert!(sizing::TOAST_WIDTH > 0.0);
    }
}
