//! Fixed guidance text attached to every summary. Nothing here feeds back
//! into the date arithmetic.

pub(crate) const fn headline(fever_known: bool) -> &'static str {
    if fever_known {
        "最短登校可能日"
    } else {
        "解熱日が未定の場合の目安"
    }
}

pub(crate) fn advisories(fever_known: bool) -> Vec<String> {
    let mut advisories = Vec::new();
    if !fever_known {
        advisories.push(
            "解熱日が入力されていません。解熱日によって期間が延びる可能性があります。".to_string(),
        );
    }
    advisories.push(
        "計算結果は学校保健安全法に基づく一般的な基準です。登校再開の最終判断は医師・学校・自治体の指示に従ってください。"
            .to_string(),
    );
    advisories.push(
        "「発症した後5日」は発症した日を0日目として数えます。出席停止期間の翌日が登校可能日です。"
            .to_string(),
    );
    advisories
}
