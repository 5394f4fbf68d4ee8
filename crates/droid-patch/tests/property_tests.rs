use droid_patch::{PatchOutcome, SigningSettings, StructuralPatcher, VersionInfo, stamp_version};
use proptest::prelude::*;

fn filler() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9 =.]{0,24}", 0..6)
}

fn assemble(parts: &[&[String]], anchors: &[&str]) -> String {
    let mut out = String::new();
    for (idx, part) in parts.iter().enumerate() {
        for line in part.iter() {
            out.push_str(line);
            out.push('\n');
        }
        if let Some(anchor) = anchors.get(idx) {
            out.push_str(anchor);
            out.push('\n');
        }
    }
    out
}

proptest! {
    #[test]
    fn test_patch_is_idempotent_and_keeps_original_lines(
        a in filler(),
        b in filler(),
        c in filler(),
        d in filler(),
    ) {
        let input = assemble(
            &[&a, &b, &c, &d],
            &["apply plugin: 'com.android.application'", "buildTypes {", "release {"],
        );
        let patcher = StructuralPatcher::signing(&SigningSettings::default()).unwrap();

        let PatchOutcome::Patched { content, inserted_lines } = patcher.patch(&input).unwrap() else {
            panic!("fresh input must be patched");
        };

        // Invariant 1: a second pass is a no-op
        prop_assert_eq!(patcher.patch(&content).unwrap(), PatchOutcome::AlreadyApplied);

        // Invariant 2: only lines were added
        prop_assert_eq!(
            content.lines().count(),
            input.lines().count() + inserted_lines
        );

        // Invariant 3: the original lines survive, in order
        let mut remaining = content.lines();
        for line in input.lines() {
            prop_assert!(remaining.any(|candidate| candidate == line));
        }
    }

    #[test]
    fn test_stamp_is_stable(code in 0u32..1_000_000, name in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}") {
        let input = "versionCode 1\nversionName \"0.0.1\"\n";
        let info = VersionInfo::new(code, name.clone());

        let once = stamp_version(input, &info);
        let twice = stamp_version(&once, &info);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once, format!("versionCode {code}\nversionName \"{name}\"\n"));
    }
}
