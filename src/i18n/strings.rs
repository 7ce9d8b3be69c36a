//! Static string tables, one per language.
//!
//! Every key must appear in `ENGLISH_TEXT` (the default language). Keys left
//! out of `JAPANESE_TEXT` resolve to the English text.
//!
//! Placeholders use `{name}` syntax and are filled by `Resolver::t_with`.

/// English strings (default language)
pub const ENGLISH_TEXT: &[(&str, &str)] = &[
    // ==================== Site Chrome ====================
    ("app_title", "DOTS Toolkit"),
    ("menu_title", "Menu"),
    ("toggle_label", "Language"),
    ("open_home_hint", "Open Home from the sidebar →"),
    ("asset_missing", "PDF not found: assets/{file}. Upload it to the assets/ folder of the deployment."),
    ("nav_home", "Home"),
    ("nav_phrases", "Phrases & Scripts"),
    ("nav_visual_tools", "Visual Tools"),
    ("nav_guides", "Guides"),
    ("nav_about", "About the Toolkit"),
    ("nav_feedback", "Feedback Tool"),
    ("nav_contact", "Contact Team"),
    ("pdf_view", "View (opens in new tab)"),
    ("pdf_download", "Download PDF"),
    // ==================== Home ====================
    ("home_title", "Neurodiversity Communication Toolkit"),
    ("home_subtitle", "Support for gentle, clear conversations about neurodiversity in Japanese educational contexts."),
    ("home_intro", "This toolkit supports educators in communicating about neurodiversity in ways that are culturally respectful, emotionally safe, and practically useful.\n\nIt does not provide diagnoses or labels. Instead, it offers language, visuals, and guidance to help conversations feel clearer and less stressful for everyone involved."),
    ("home_quick_actions", "Quick actions"),
    ("qa_parents", "I’m talking to parents"),
    ("qa_students", "I’m talking to students"),
    ("qa_colleagues", "I’m talking to colleagues"),
    ("home_explore", "Explore"),
    ("ex_phrases", "Browse phrases & scripts"),
    ("ex_visual", "Explore visual tools"),
    ("ex_guides", "View conversation guides"),
    // ==================== Phrases & Scripts ====================
    ("phrases_title", "Phrases & Scripts"),
    ("phrases_subtitle", "Example phrases educators can adapt (strength-based, non-medical, culturally considerate)."),
    ("phrases_intro", "This section provides example phrases that educators can adapt when discussing neurodiversity."),
    ("phrases_strengths_heading", "Opening with strengths"),
    ("phrases_strengths_1", "First, I’d like to share some of your child’s strengths."),
    ("phrases_strengths_2", "○○ has many positive qualities, including curiosity and creativity."),
    ("phrases_strengths_3", "○○ shows their own unique way of thinking and learning."),
    ("phrases_needs_heading", "Describing needs without labels"),
    ("phrases_needs_1", "There are situations where learning feels easier, and others where it feels more challenging."),
    ("phrases_needs_2", "○○ seems to focus better in quieter or more structured environments."),
    ("phrases_needs_3", "This is not about what ○○ cannot do, but about how we can support them better."),
    ("phrases_collab_heading", "Inviting collaboration"),
    ("phrases_collab_1", "We would like to think together about what kind of support might be helpful."),
    ("phrases_collab_2", "Your insights as a parent are very important to us."),
    ("phrases_collab_3", "We see this as a shared effort between home and school."),
    ("phrases_closing_heading", "Closing the conversation"),
    ("phrases_closing_1", "Please feel free to share any concerns or questions at any time."),
    ("phrases_closing_2", "We can take this step by step."),
    ("phrases_closing_3", "Our goal is for ○○ to feel comfortable and supported."),
    ("support_card_heading", "Conversation Support Card"),
    ("support_card_caption", "View the PDF in a new tab, or download it below."),
    ("support_card_view", "View Conversation Support Card (PDF)"),
    ("support_card_download", "Download Conversation Support Card (PDF)"),
    // ==================== Visual Tools ====================
    ("visual_title", "Visual & Narrative Tools"),
    ("visual_subtitle", "Simple metaphors and design guidance to support understanding without labels."),
    ("metaphors_heading", "Visual Metaphors"),
    ("metaphors_intro", "These metaphors help communicate neurodiversity in a calm, non-clinical, and non-hierarchical way. They support understanding without labels, diagnosis language, or comparison."),
    ("dots_title", "Dots Narrative"),
    ("dots_body", "A gentle metaphor for diversity as different “dots” that form unique patterns—emphasizing variation without ranking or evaluation."),
    ("dots_use_when", "Use when: introducing neurodiversity without labels"),
    ("dots_supports", "Supports: emotional safety, curiosity, shared understanding"),
    ("dots_avoids", "Avoids: “normal/abnormal” framing, clinical imagery"),
    ("dots_pdf", "Dots Narrative (PDF)"),
    ("waves_title", "Waves Narrative"),
    ("waves_body", "A metaphor for different rhythms and intensity in communication and learning—supporting the idea that people regulate and respond differently."),
    ("waves_use_when", "Use when: explaining sensory load, pacing, or emotional regulation"),
    ("waves_supports", "Supports: calm reframing, reduced blame, practical adjustments"),
    ("waves_avoids", "Avoids: deficit language, correction/improvement framing"),
    ("waves_pdf", "Waves Narrative (PDF)"),
    ("pathways_title", "Pathways Narrative"),
    ("pathways_body", "A metaphor for different paths to the same goal—highlighting that learning and communication can succeed through multiple routes."),
    ("pathways_use_when", "Use when: discussing support strategies, accommodations, or alternative methods"),
    ("pathways_supports", "Supports: collaboration, flexibility, shared problem-solving"),
    ("pathways_avoids", "Avoids: “one correct way” assumptions"),
    ("pathways_pdf", "Pathways Narrative (PDF)"),
    ("metaphors_tip", "Tip: These metaphors work best when paired with strengths-based language and non-evaluative phrasing."),
    ("color_heading", "Color Guidelines"),
    ("color_intro", "Color in this framework supports emotional safety, clarity, and non-hierarchical communication. Colors express variation and diversity without implying value, ability, or priority."),
    ("color_palette_title", "Palette Direction (soft pastel tones only)"),
    ("color_palette_1", "Soft, pastel tones only"),
    ("color_palette_2", "Limited palette to maintain calmness and consistency"),
    ("color_core_label", "Core colors include:"),
    ("color_core_blue", "Soft blue"),
    ("color_core_mint", "Mint green"),
    ("color_core_peach", "Peach"),
    ("color_core_lavender", "Lavender"),
    ("color_core_yellow", "Pale yellow"),
    ("color_palette_note", "These colors are selected to avoid urgency, evaluation, or medical association."),
    ("color_rules_title", "Color Usage Rules"),
    ("color_rules_1", "No single color should dominate a layout"),
    ("color_rules_2", "Color must not encode ability, value, correctness, or priority"),
    ("color_rules_3", "All colors should be used evenly and gently"),
    ("color_rules_4", "Color variation communicates difference without hierarchy"),
    ("color_avoid_title", "Colors to Avoid"),
    ("color_avoid_1", "Red / green oppositions"),
    ("color_avoid_2", "Black–white binaries"),
    ("color_avoid_3", "Medical, warning, or alert colors"),
    ("color_avoid_note", "These schemes may introduce unintended emotional pressure or evaluative meaning."),
    ("color_access_title", "Accessibility & Consistency"),
    ("color_access_1", "Colors must support readability on light backgrounds"),
    ("color_access_2", "Meaning should never rely on color alone"),
    ("color_access_3", "Color use should remain consistent across cards, visuals, app screens, and printed materials"),
    ("color_summary", "Summary: Color is expressive but restrained. It supports calm communication and shared understanding without directing judgment or comparison."),
    ("color_pdf", "Color Guidelines (PDF)"),
    ("typography_heading", "Typography"),
    ("typography_intro", "Typography is designed to support clarity, emotional safety, and cultural neutrality. Fonts are chosen to reduce cognitive load and avoid an authoritative or clinical tone."),
    ("typography_primary_title", "Primary Typeface (Neutral Sans-Serif)"),
    ("typography_fonts_label", "Recommended fonts:"),
    ("typography_font_en", "English: Inter / Source Sans 3"),
    ("typography_font_ja", "Japanese: Noto Sans JP"),
    ("typography_traits_label", "These fonts are:"),
    ("typography_trait_legible", "highly legible at small sizes"),
    ("typography_trait_calm", "visually calm and non-decorative"),
    ("typography_trait_suitable", "suitable for educational and professional contexts"),
    // ==================== Guides ====================
    ("guides_title", "Guides for Common Situations"),
    ("guides_subtitle", "Short structures for conversations educators often find stressful or unclear."),
    ("guides_intro", "These guides offer structure for situations that educators often find stressful or unclear."),
    ("guide_keep_in_mind", "Keep in mind:"),
    ("guide_suggested", "Suggested approach:"),
    ("guide_example_closing", "Example closing line:"),
    ("guide_example_line", "Example line:"),
    ("guide_parents_heading", "First conversation with parents"),
    ("guide_parents_keep_1", "Start with strengths and observations, not conclusions"),
    ("guide_parents_keep_2", "Avoid technical or diagnostic language"),
    ("guide_parents_keep_3", "Allow silence and reflection"),
    ("guide_parents_step_1", "Share positive observations"),
    ("guide_parents_step_2", "Describe learning environments that help"),
    ("guide_parents_step_3", "Invite collaboration rather than agreement"),
    ("guide_parents_quote", "“We can take this step by step, and we’ll think together about what support feels helpful.”"),
    ("guide_students_heading", "Talking with students"),
    ("guide_students_keep_1", "Use age-appropriate language"),
    ("guide_students_keep_2", "Avoid making the student feel “different” or “wrong”"),
    ("guide_students_keep_3", "Focus on comfort and learning styles"),
    ("guide_students_step_1", "Explain that everyone learns differently"),
    ("guide_students_step_2", "Use simple metaphors (dots/waves/pathways)"),
    ("guide_students_step_3", "Emphasize support, not correction"),
    ("guide_students_quote", "“There’s no single ‘right’ way—let’s find the way that feels easiest for you.”"),
    ("guide_colleagues_heading", "Talking with colleagues"),
    ("guide_colleagues_keep_1", "Aim for shared understanding, not persuasion"),
    ("guide_colleagues_keep_2", "Use consistent language across staff"),
    ("guide_colleagues_keep_3", "Keep it practical"),
    ("guide_colleagues_step_1", "Share observations, not judgments"),
    ("guide_colleagues_step_2", "Focus on classroom strategies and environment"),
    ("guide_colleagues_step_3", "Align on supportive language and next steps"),
    ("guide_colleagues_quote", "“Let’s keep the language consistent so the student experiences the same support across classes.”"),
    ("guides_caption", "These guides are designed to stay non-clinical, non-evaluative, and collaboration-focused."),
    // ==================== About ====================
    ("about_title", "About This Toolkit"),
    ("about_intro", "This toolkit is part of a research project on culturally responsive communication for neurodiversity in Japan.\n\nIt is based on the idea that communication itself plays a key role in inclusion—especially in high-context cultural settings where harmony and indirect expression are valued."),
    ("about_framework_heading", "Framework (3 layers)"),
    ("about_layer_language", "Language Layer: Tone, phrasing, and indirect communication that reduce emotional risk."),
    ("about_layer_visual", "Visual Layer: Abstract metaphors and visuals that support understanding without labels."),
    ("about_layer_interaction", "Interaction Layer: Conversation structures that support collaboration and trust."),
    ("about_disclaimer", "Disclaimer: This toolkit is not a diagnostic or medical tool. It does not assess, label, or classify individuals. Its purpose is to support communication and understanding."),
    // ==================== Feedback ====================
    ("feedback_title", "Feedback Tool"),
    ("feedback_subtitle", "Share feedback to help improve the toolkit. Your responses are collected via Google Forms."),
    ("feedback_form_heading", "Submit via Google Form"),
    ("feedback_form_hint", "If the embedded form doesn’t load, use the button below."),
    ("feedback_open_form", "Open Feedback Form"),
    ("feedback_embed_heading", "Fill the form here"),
    ("feedback_backup_title", "Backup: Quick feedback (downloadable CSV)"),
    ("feedback_backup_intro", "Use this only if Google Forms is unavailable. You can download your entry as a CSV and send it to the project team."),
    ("feedback_name", "Name (optional)"),
    ("feedback_role", "Your role"),
    ("feedback_role_teacher", "Teacher/Educator"),
    ("feedback_role_staff", "School staff"),
    ("feedback_role_parent", "Parent/Guardian"),
    ("feedback_role_student", "Student"),
    ("feedback_role_other", "Other"),
    ("feedback_rating", "Overall usefulness"),
    ("feedback_comment", "What worked well? What should be improved?"),
    ("feedback_submit", "Generate CSV"),
    ("feedback_invalid_rating", "Please choose a rating between 1 and 5."),
    // ==================== Contact ====================
    ("contact_title", "Contact Team"),
    ("contact_subtitle", "Reach the project team, share questions, or request collaboration."),
    ("contact_reach_heading", "How to reach us"),
    ("contact_email_line", "Email: {email}"),
    ("contact_response_time", "Response time: 2–5 business days"),
    ("contact_for_schools", "For schools: Please include school name, role, and preferred language (English/Japanese)"),
    ("contact_send_heading", "Send a message"),
    ("contact_name", "Your name"),
    ("contact_affiliation", "Affiliation (optional)"),
    ("contact_email", "Your email (optional)"),
    ("contact_topic", "Topic"),
    ("contact_topic_general", "General question"),
    ("contact_topic_school", "School implementation"),
    ("contact_topic_workshop", "Workshop / training request"),
    ("contact_topic_research", "Collaboration / research"),
    ("contact_topic_issue", "Report an issue"),
    ("contact_topic_other", "Other"),
    ("contact_message", "Message"),
    ("contact_placeholder", "Write your message here..."),
    ("contact_consent", "I understand this is not a diagnostic service."),
    ("contact_submit", "Generate email text"),
    ("contact_consent_required", "Please tick the acknowledgement checkbox before generating."),
    ("contact_invalid_form", "The message could not be read. Please fill in the form and try again."),
    ("contact_draft_ready", "Copy and paste the text below into your email app."),
    ("contact_open_mail", "Open email draft in your mail app"),
    ("contact_footer", "This toolkit supports communication and understanding. It does not provide diagnosis or clinical assessment."),
];

/// Japanese strings
pub const JAPANESE_TEXT: &[(&str, &str)] = &[
    // ==================== Site Chrome ====================
    ("app_title", "DOTS ツールキット"),
    ("menu_title", "メニュー"),
    ("toggle_label", "言語"),
    ("open_home_hint", "サイドバーからホームを開いてください →"),
    ("asset_missing", "PDFが見つかりません：assets/{file} をデプロイ先の assets/ にアップロードしてください。"),
    ("nav_home", "ホーム"),
    ("nav_phrases", "フレーズ／台本"),
    ("nav_visual_tools", "視覚ツール"),
    ("nav_guides", "ガイド"),
    ("nav_about", "ツールキットについて"),
    ("nav_feedback", "フィードバック"),
    ("nav_contact", "お問い合わせ"),
    ("pdf_view", "表示（新しいタブ）"),
    ("pdf_download", "PDFをダウンロード"),
    // ==================== Home ====================
    ("home_title", "ニューロダイバーシティ・コミュニケーション ツールキット"),
    ("home_subtitle", "日本の教育現場におけるニューロダイバーシティをめぐる、やさしく明確な対話を支えるツールです。"),
    ("home_intro", "本ツールキットは、教育者がニューロダイバーシティについて話すときに、文化的配慮・心理的安全性・実用性を両立しながら、対話を進めるための支援を目的としています。\n\n診断やラベル付けを行うものではありません。代わりに、言葉・視覚的メタファー・会話の進め方を通して、対話がより明確で、ストレスの少ないものになるよう助けます。"),
    ("home_quick_actions", "クイックアクション"),
    ("qa_parents", "保護者と話す"),
    ("qa_students", "生徒と話す"),
    ("qa_colleagues", "同僚と話す"),
    ("home_explore", "探す"),
    ("ex_phrases", "フレーズ／台本を見る"),
    ("ex_visual", "視覚ツールを見る"),
    ("ex_guides", "会話ガイドを見る"),
    // ==================== Phrases & Scripts ====================
    ("phrases_title", "フレーズ／台本"),
    ("phrases_subtitle", "教育者が状況に合わせて調整できる例文（強みベース／非医療的／文化的配慮）。"),
    ("phrases_intro", "このセクションでは、ニューロダイバーシティについて話す際に調整して使える例文を提供します。"),
    ("phrases_strengths_heading", "強みから始める"),
    ("phrases_needs_heading", "ラベルなしでニーズを伝える"),
    ("phrases_collab_heading", "協働を促す"),
    ("phrases_closing_heading", "安心して終える"),
    ("support_card_heading", "会話サポートカード"),
    ("support_card_caption", "PDFは新しいタブで表示するか、下からダウンロードできます。"),
    ("support_card_view", "会話サポートカード（PDF）を表示"),
    ("support_card_download", "会話サポートカード（PDF）をダウンロード"),
    // ==================== Visual Tools ====================
    ("visual_title", "視覚／ナラティブツール"),
    ("visual_subtitle", "ラベルなしで理解を助けるメタファーとデザイン指針。"),
    ("metaphors_heading", "ビジュアル・メタファー"),
    ("metaphors_intro", "これらのメタファーは、ニューロダイバーシティを落ち着いて、非臨床的かつ非階層的に伝えるためのものです。ラベルや診断的な言葉、比較を避けながら理解を支えます。"),
    ("dots_title", "Dots（ドット）ナラティブ"),
    ("dots_body", "多様性を「異なるドットが形づくるユニークなパターン」として捉える、やさしいメタファーです。優劣や評価を含まず、違いをそのまま尊重します。"),
    ("dots_use_when", "使う場面：ラベルを使わずにニューロダイバーシティを紹介したいとき"),
    ("dots_supports", "支えるもの：心理的安全性、好奇心、共通理解"),
    ("dots_avoids", "避けるもの：正常／異常の枠組み、臨床的イメージ"),
    ("dots_pdf", "Dots ナラティブ（PDF）"),
    ("waves_title", "Waves（波）ナラティブ"),
    ("waves_body", "コミュニケーションや学びの「リズムや強さの違い」を波として表すメタファーです。人それぞれ調整や反応の仕方が違うことを自然に伝えます。"),
    ("waves_use_when", "使う場面：感覚負荷、ペース、情動の調整を説明したいとき"),
    ("waves_supports", "支えるもの：落ち着いた捉え直し、責めない理解、実務的な調整"),
    ("waves_avoids", "避けるもの：欠如表現、矯正／改善の枠組み"),
    ("waves_pdf", "Waves ナラティブ（PDF）"),
    ("pathways_title", "Pathways（道筋）ナラティブ"),
    ("pathways_body", "「同じ目的でも道筋は一つではない」というメタファーです。学びや対話は複数のルートで成立することを示します。"),
    ("pathways_use_when", "使う場面：支援方法、合理的配慮、別のやり方を話すとき"),
    ("pathways_supports", "支えるもの：協働、柔軟性、共同での問題解決"),
    ("pathways_avoids", "避けるもの：「正しい方法は一つ」という前提"),
    ("pathways_pdf", "Pathways ナラティブ（PDF）"),
    ("metaphors_tip", "ヒント：これらのメタファーは、強みベースで評価しない言い回しと組み合わせると最も効果的です。"),
    ("color_heading", "カラーガイドライン"),
    ("color_intro", "色は、安心感・明確さ・非階層的なコミュニケーションを支えます。価値や能力の優劣、正しさ、優先度を示すためには使いません。"),
    ("color_summary", "まとめ：色は表現的ですが抑制的に。判断や比較を誘導せず、落ち着いた対話と共通理解を支えます。"),
    ("color_pdf", "カラーガイドライン（PDF）"),
    ("typography_heading", "タイポグラフィ"),
    ("typography_intro", "タイポグラフィは、明確さ・心理的安全性・文化的中立性を支えるために設計します。認知負荷を下げ、権威的／臨床的な印象を避けるフォントを選びます。"),
    ("typography_fonts_label", "推奨フォント："),
    ("typography_font_en", "英語: Inter / Source Sans 3"),
    ("typography_font_ja", "日本語: Noto Sans JP"),
    ("typography_traits_label", "これらのフォントは："),
    ("typography_trait_legible", "小さなサイズでも読みやすい"),
    ("typography_trait_calm", "落ち着いた印象で装飾性が低い"),
    ("typography_trait_suitable", "教育・プロフェッショナル環境に適している"),
    // ==================== Guides ====================
    ("guides_title", "よくある場面のガイド"),
    ("guides_subtitle", "ストレスや不明確さを感じやすい場面で使える、短い会話構造。"),
    ("guides_intro", "このガイドは、教育者がストレスや曖昧さを感じやすい場面で、会話に骨組みを与えます。"),
    ("guide_keep_in_mind", "ポイント："),
    ("guide_suggested", "進め方（例）："),
    ("guide_example_closing", "締めの一言（例）："),
    ("guide_example_line", "例文："),
    ("guide_parents_heading", "保護者との最初の会話"),
    ("guide_parents_keep_1", "結論ではなく、強みと観察から始める"),
    ("guide_parents_keep_2", "専門用語／診断的な言葉を避ける"),
    ("guide_parents_keep_3", "沈黙や振り返りの時間を許容する"),
    ("guide_parents_step_1", "ポジティブな観察を共有"),
    ("guide_parents_step_2", "学びやすい環境・条件を説明"),
    ("guide_parents_step_3", "同意を求めるより、協働を提案する"),
    ("guide_parents_quote", "「焦らず一歩ずつ、一緒に“合う支援”を考えていけたらと思います。」"),
    ("guide_students_heading", "生徒と話す"),
    ("guide_students_keep_1", "年齢に合った言葉で話す"),
    ("guide_students_keep_2", "「違う／間違い」を感じさせない"),
    ("guide_students_keep_3", "心地よさと学び方に焦点を置く"),
    ("guide_students_step_1", "人それぞれ学び方が違うと伝える"),
    ("guide_students_step_2", "ドット／波／道筋などのメタファーを使う"),
    ("guide_students_step_3", "矯正ではなく“支え”を強調する"),
    ("guide_students_quote", "「正しいやり方は一つじゃないよ。あなたが一番やりやすい方法を一緒に探そう。」"),
    ("guide_colleagues_heading", "同僚と話す"),
    ("guide_colleagues_keep_1", "説得より“共通理解”を目指す"),
    ("guide_colleagues_keep_2", "職員間で言葉づかいを揃える"),
    ("guide_colleagues_keep_3", "実務的・具体的にする"),
    ("guide_colleagues_step_1", "判断ではなく観察を共有"),
    ("guide_colleagues_step_2", "教室の工夫や環境に焦点を当てる"),
    ("guide_colleagues_step_3", "支援的な言葉と次の一手を揃える"),
    ("guide_colleagues_quote", "「クラスが変わっても同じ支援が伝わるように、言葉を揃えませんか。」"),
    ("guides_caption", "このガイドは、非臨床・非評価・協働重視の立ち位置を保つために設計されています。"),
    // ==================== About ====================
    ("about_title", "ツールキットについて"),
    ("about_intro", "本ツールキットは、日本におけるニューロダイバーシティの文化応答的コミュニケーションに関する研究プロジェクトの一部です。\n\n特に、調和や間接表現が重視されるハイコンテクスト文化において、コミュニケーションそのものがインクルージョンの鍵になるという考えに基づいています。"),
    ("about_framework_heading", "フレームワーク（3層）"),
    ("about_disclaimer", "免責事項：本ツールキットは診断や医療目的のツールではありません。個人を評価・ラベル付け・分類しません。目的は対話と理解の支援です。"),
    // ==================== Feedback ====================
    ("feedback_title", "フィードバック"),
    ("feedback_subtitle", "ツールキット改善のためのフィードバックをお寄せください。回答はGoogleフォームで収集されます。"),
    ("feedback_form_heading", "Googleフォームで送信"),
    ("feedback_form_hint", "埋め込みフォームが表示されない場合は、下のボタンから開いてください。"),
    ("feedback_open_form", "フィードバックフォームを開く"),
    ("feedback_embed_heading", "ここで回答する"),
    ("feedback_backup_intro", "Googleフォームが使えない場合の予備です。入力内容をCSVとしてダウンロードできます。"),
    ("feedback_name", "お名前（任意）"),
    ("feedback_role", "立場"),
    ("feedback_role_teacher", "教員"),
    ("feedback_role_staff", "学校職員"),
    ("feedback_role_parent", "保護者"),
    ("feedback_role_student", "生徒"),
    ("feedback_role_other", "その他"),
    ("feedback_rating", "全体の有用性"),
    ("feedback_comment", "良かった点／改善点を教えてください。"),
    ("feedback_submit", "CSVを作成"),
    ("feedback_invalid_rating", "評価は1〜5の範囲で選んでください。"),
    // ==================== Contact ====================
    ("contact_title", "お問い合わせ"),
    ("contact_subtitle", "質問・相談・連携のご希望はこちらからご連絡ください。"),
    ("contact_reach_heading", "連絡方法"),
    ("contact_email_line", "メール：{email}"),
    ("contact_response_time", "返信目安：2〜5営業日"),
    ("contact_for_schools", "学校関係の方：学校名・ご担当・希望言語（日本語／英語）を添えてください"),
    ("contact_send_heading", "メッセージを送る"),
    ("contact_name", "お名前"),
    ("contact_affiliation", "所属（任意）"),
    ("contact_email", "メールアドレス（任意）"),
    ("contact_topic", "内容"),
    ("contact_topic_general", "一般的な質問"),
    ("contact_topic_school", "学校導入について"),
    ("contact_topic_workshop", "研修・ワークショップ依頼"),
    ("contact_topic_research", "共同研究・連携"),
    ("contact_topic_issue", "不具合の報告"),
    ("contact_topic_other", "その他"),
    ("contact_message", "メッセージ"),
    ("contact_placeholder", "ここにご記入ください…"),
    ("contact_consent", "これは診断サービスではないことを理解しています。"),
    ("contact_submit", "メール文を生成"),
    ("contact_consent_required", "生成の前に確認チェックを入れてください。"),
    ("contact_invalid_form", "送信内容を読み取れませんでした。もう一度フォームに入力してください。"),
    ("contact_draft_ready", "下の文章をコピーしてメールに貼り付けてください。"),
    ("contact_open_mail", "メールアプリで下書きを開く"),
    ("contact_footer", "本ツールキットは理解と対話を支援するものであり、診断や臨床評価は行いません。"),
];
