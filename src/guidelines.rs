//! Fixed transcript text printed around the method comparison.
//!
//! Both blocks render verbatim: the guidelines before any network activity,
//! the best-practices list under the closing SUMMARY banner. Method numbers
//! here match the numbered steps of the run.

/// Ethical and legal considerations, printed at the top of every run.
pub const ETHICAL_GUIDELINES: &str = r"
ETHICAL AND LEGAL CONSIDERATIONS FOR REDDIT SCRAPING:

1. TERMS OF SERVICE:
   - Always review Reddit's ToS: https://www.reddit.com/help/useragreement/
   - Automated scraping may violate ToS

2. ROBOTS.TXT:
   - Respect Reddit's robots.txt file
   - URL: https://www.reddit.com/robots.txt
   - Check what's allowed/disallowed

3. RATE LIMITING:
   - Implement delays between requests (2+ seconds recommended)
   - Don't overload Reddit's servers
   - Use official API for bulk operations

4. DATA PRIVACY:
   - Don't scrape personal information
   - Be mindful of user privacy
   - Don't store sensitive data unnecessarily

5. ATTRIBUTION:
   - Give credit to original posters
   - Include source information
   - Be transparent about data usage

6. RECOMMENDED APPROACH:
   - Use the official API (Method 1) - BEST PRACTICE
   - Use the JSON endpoint (Method 2) - ACCEPTABLE
   - Avoid HTML scraping (Method 4) - NOT RECOMMENDED
   - Check Pushshift status before using (Method 3)

7. USE CASES:
   - ✓ Research and analysis
   - ✓ Academic projects
   - ✓ Personal projects with proper delays
   - ✗ Commercial use without permission
   - ✗ Creating competing services
   - ✗ Aggressive scraping
";

/// Closing recommendations, printed under the SUMMARY banner.
pub const BEST_PRACTICES: &str = r"
Best Practices:
1. Use the official API for production applications
2. Always implement rate limiting and delays
3. Respect robots.txt and ToS
4. Consider the ethical implications
5. Cache results when possible to reduce requests
6. Document your data sources
";
