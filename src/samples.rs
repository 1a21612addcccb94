//! Captured completion outputs used by the `compare` and `paragraphs` commands.

/// `content` field of the first captured completion, as it appeared in the JSON dump.
pub const CAPTURED_A: &str = "        \"content\": \"\nHere are some suggestions to improve the accessibility of your PDF.\n\n1. **Add a Document Language:** Your PDF doesn\u{2019}t clearly specify the language it\u{2019}s written in (like English, Spanish, or French). This is important for screen readers to pronounce words correctly. In Acrobat, you can usually find this setting under \u{201c}File\u{201d} -> \u{201c}Properties\u{201d} -> \u{201c}Language\u{201d}. Select the appropriate language from the dropdown menu.\n\n2. **Create a Proper Document Structure (Tags):** The PDF lacks a well-defined reading order and logical structure. Think of this like headings and paragraphs in a word processor. Screen readers use this structure to help people navigate the document. Acrobat has an \u{201c}Accessibility\u{201d} tool that can help you add tags, or automatically detect the reading order. You may need to review and correct the automatically generated tags to ensure they are accurate.\n\n3. **Mark Content as Artifact or Real Content:** The accessibility checker found a lot of content that isn\u{2019}t clearly identified as either meaningful text/images (real content) or purely decorative elements (artifact content). Screen readers will attempt to read *everything* in the document, including things that shouldn\u{2019}t be read aloud. In Acrobat, when you are in the tagging mode, you can set content to be marked as an artifact. This tells screen readers to ignore it. \n\nThese three steps will likely address the majority of the accessibility issues. There may be other, less critical things to improve, but focusing on these will make the biggest difference for people using assistive technology.\n\n\n\n\",\n";

/// `content` field of the second captured completion for the same prompt.
pub const CAPTURED_B: &str = "        \"content\": \"\nHere are some suggestions to improve the accessibility of your PDF.\n\n1. **Add a Document Language:** Your PDF doesn\u{2019}t clearly specify the language it\u{2019}s written in (like English, Spanish, or French). This is important for screen readers to pronounce words correctly. In Acrobat, you can go to File > Properties > Language and set the appropriate language.\n\n2. **Create a Proper Document Structure (Tags):** The PDF is missing a key element that tells screen readers how the document is organized \u{2013} think of it like headings and paragraphs in a word processor. Acrobat has an \u{201c}Accessibility Check\u{201d} tool (Tools > Accessibility > Check Accessibility) that can help you identify missing tags and guide you through adding them. Focus on adding tags to headings, paragraphs, lists, and tables.\n\n3. **Mark Content as Artifact or Real Content:** The PDF checker found a lot of content that isn\u{2019}t clearly identified as either meaningful text/images (real content) or purely decorative elements (artifact content). Screen readers will attempt to read *everything* in the document, so marking decorative elements as \u{201c}artifact\u{201d} tells the screen reader to skip them. Again, Acrobat\u{2019}s Accessibility Check tool can help you find these areas and assign the correct classifications.\n\nAddressing these three areas will likely resolve the majority of the accessibility issues. There may be other, smaller improvements needed, but these are the most impactful to start with.\n\n\n\n\",";

/// A quoted completion string as copied out of a JSON dump.
pub const QUOTED_COMPLETION: &str = "\"\nHere are some suggestions to improve the accessibility of your PDF.\n\n1. **Add a Document Language:** Your PDF doesn\u{2019}t clearly specify the language it\u{2019}s written in (like English, Spanish, or French). This is important for screen readers to pronounce words correctly. In Acrobat, you can go to File > Properties > Language and set the appropriate language.\n\n2. **Create a Proper Document Structure (Tags):** The PDF is missing a key element that tells screen readers how the document is organized \u{2013} think of it like headings and paragraphs in a word processor. Acrobat has an \u{201c}Accessibility Check\u{201d} tool (Tools > Accessibility > Check Accessibility) that can help you identify missing tags and guide you through adding them. Focus on adding tags to headings, paragraphs, lists, and tables.\n\n3. **Mark Content as Artifact or Real Content:** The PDF checker found a lot of content that isn\u{2019}t clearly identified as either meaningful text/images (real content) or purely decorative elements (artifact content). Screen readers will attempt to read *everything* in the document, so marking decorative elements as \u{201c}artifact\u{201d} tells the screen reader to skip them. Again, Acrobat\u{2019}s Accessibility Check tool can help you find these areas and assign the correct classifications.\n\nAddressing these three areas will likely resolve the majority of the accessibility issues. There may be other, smaller improvements needed, but these are the most impactful to start with.\n\n\n\n\"";
