/// Declare a [`ComboRule`](crate::ComboRule) without spelling out the boxed
/// closure type.
///
/// ```
/// use recast::{ActionId, Preset, combo};
///
/// let rule = combo! {
///     name: "astrologian benefic downgrade",
///     preset: Preset::AstrologianBeneficDowngrade,
///     triggers: [ActionId(3610)],
///     decide: |attempt, _snapshot| {
///         if attempt.level < 26 {
///             return Ok(ActionId(3594));
///         }
///         Ok(attempt.action)
///     },
/// };
/// assert_eq!(rule.triggers.len(), 1);
/// ```
///
/// `triggers` may be omitted, in which case the rule applies to every action
/// attempted by its job. The `decide` body must evaluate to
/// `Result<ActionId, RuleError>`.
#[macro_export]
macro_rules! combo {
    (
        name: $name:expr,
        preset: $preset:expr,
        $(triggers: [ $($trigger:expr),* $(,)? ],)?
        decide: |$attempt:ident, $snapshot:ident| $body:block
        $(,)?
    ) => {{
        $crate::ComboRule {
            name: $name,
            preset: $preset,
            triggers: &[ $($($trigger),*)? ],
            decide: Box::new(
                move |$attempt: &$crate::Attempt,
                      $snapshot: &$crate::Snapshot<'_>|
                      -> Result<$crate::ActionId, $crate::RuleError> { $body },
            ),
        }
    }};
}
